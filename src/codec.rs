//! Serde support.
//!
//! A union serializes as its populated alternative, with no tag of its own.
//! Deserializing buffers the input and offers it to each alternative in list
//! order; the first one that accepts it wins. A union over the empty list
//! never deserializes.
//!
//! ```rust
//! use tunion::OpenUnion;
//!
//! type U = OpenUnion![String, i32];
//!
//! let u = U::new("hello".to_string());
//! let json = serde_json::to_string(&u).unwrap();
//! assert_eq!(json, "\"hello\"");
//! assert_eq!(serde_json::from_str::<U>(&json).unwrap(), u);
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::UnionError,
    interpret::Interpret,
    union::{Cons, Nil},
};

impl Serialize for Nil {
    fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

impl<F: Interpret, H, T> Serialize for Cons<F, H, T>
where
    F::Apply<H>: Serialize,
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cons::This(head) => head.serialize(serializer),
            Cons::That(tail) => tail.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Nil {
    fn deserialize<D: Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
        Err(de::Error::custom(UnionError::Uninhabited))
    }
}

/// One step of the search: the head alternative or the rest of the list.
#[derive(Deserialize)]
#[serde(untagged, expecting = "a value accepted by one of the union's alternatives")]
enum Step<H, T> {
    This(H),
    That(T),
}

impl<'de, F: Interpret, H, T> Deserialize<'de> for Cons<F, H, T>
where
    F::Apply<H>: Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Step::<F::Apply<H>, T>::deserialize(deserializer)? {
            Step::This(head) => Cons::This(head),
            Step::That(tail) => Cons::That(tail),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    use super::*;
    use crate::{Interpret, OpenUnion, Union};

    #[test]
    fn string_int_scenario() {
        type U = OpenUnion![String, i32];

        let u = U::new("hello".to_string());
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(json, "\"hello\"");
        assert_eq!(serde_json::from_str::<U>(&json).unwrap(), u);

        let n: U = serde_json::from_str("12").unwrap();
        assert_eq!(n.extract::<i32, _>(), Some(12));
    }

    #[test]
    fn earlier_alternative_wins() {
        let u: OpenUnion![f64, i64] = serde_json::from_str("3").unwrap();
        assert_eq!(u.extract::<f64, _>(), Some(3.0));

        let u: OpenUnion![i64, f64] = serde_json::from_str("3").unwrap();
        assert_eq!(u.extract::<i64, _>(), Some(3));

        let u: OpenUnion![i64, f64] = serde_json::from_str("3.5").unwrap();
        assert_eq!(u.extract::<f64, _>(), Some(3.5));
    }

    #[test]
    fn rejected_by_every_alternative() {
        type U = OpenUnion![bool, i32];

        let err = serde_json::from_str::<U>("\"text\"").unwrap_err();
        assert!(err.is_data());
    }

    #[test]
    fn empty_union_is_uninhabited() {
        let err = serde_json::from_str::<Nil>("null").unwrap_err();
        assert!(err.to_string().contains("uninhabited"));
    }

    #[test]
    fn structured_alternatives() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        // A derived struct also accepts a sequence, so `Vec<i32>` goes first.
        type Shape = OpenUnion![Vec<i32>, Point];

        let shapes = vec![Shape::new(Point { x: 1, y: 2 }), Shape::new(vec![3, 4])];
        let json = serde_json::to_string(&shapes).unwrap();
        assert_eq!(json, r#"[{"x":1,"y":2},[3,4]]"#);

        let back: Vec<Shape> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shapes);
    }

    #[test]
    fn wrapped_alternatives() {
        struct Maybe;

        impl Interpret for Maybe {
            type Apply<T> = Option<T>;
        }

        type U = Union![Maybe; i32, String];

        let u = U::lift::<String, _>(Some("a".to_string()));
        assert_eq!(serde_json::to_string(&u).unwrap(), "\"a\"");

        // `null` is a valid `Option<i32>`, so the head takes it.
        let none: U = serde_json::from_str("null").unwrap();
        assert_eq!(none.project::<i32, _>(), Some(None));
    }
}
