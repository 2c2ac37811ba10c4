//! Open unions: unions that store their alternatives without any wrapper.
//!
//! ```rust
//! use tunion::OpenUnion;
//!
//! type Value = OpenUnion![String, f64, i32];
//!
//! let v = Value::new(3.3);
//! assert_eq!(v.clone().extract::<f64, _>(), Some(3.3));
//! assert_eq!(v.extract::<i32, _>(), None);
//! ```

use crate::{
    index::Index,
    interpret::Identity,
    list::Union,
    member::Member,
    union::{Cons, Nil},
};

/// The open union over the type list `L`.
pub type OpenUnion<L> = Union<Identity, L>;

impl<H, T> Cons<Identity, H, T> {
    /// Injects a value, inferring its alternative from its type.
    pub fn new<X, I>(value: X) -> Self
    where
        Self: Member<Identity, X, I>,
        I: Index,
    {
        <Self as Member<Identity, X, I>>::lift(value)
    }

    /// Returns the value if the union holds an `X`.
    pub fn extract<X, I>(self) -> Option<X>
    where
        Self: Member<Identity, X, I>,
        I: Index,
    {
        <Self as Member<Identity, X, I>>::project(self)
    }

    /// Case-splits on the union with the head value passed bare.
    pub fn case<R>(self, on_rest: impl FnOnce(T) -> R, on_value: impl FnOnce(H) -> R) -> R {
        match self {
            Cons::This(value) => on_value(value),
            Cons::That(rest) => on_rest(rest),
        }
    }
}

impl<H> From<H> for Cons<Identity, H, Nil> {
    /// Constructs an open union of one type from a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tunion::OpenUnion;
    ///
    /// let u: OpenUnion![i32] = 42.into();
    /// assert_eq!(u.into_inner(), 42);
    /// ```
    fn from(value: H) -> Self {
        Cons::This(value)
    }
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use crate::OpenUnion;

    type Value = OpenUnion![String, f64, i32];

    #[test]
    fn new_infers_alternative() {
        let s = Value::new("x".to_string());
        let d = Value::new(1.0f64);
        let i = Value::new(1i32);

        assert_eq!(s.position(), 0);
        assert_eq!(d.position(), 1);
        assert_eq!(i.position(), 2);
    }

    #[test]
    fn extract_only_the_populated_alternative() {
        let v = Value::new(7);
        assert_eq!(v.clone().extract::<i32, _>(), Some(7));
        assert_eq!(v.clone().extract::<f64, _>(), None);
        assert_eq!(v.extract::<String, _>(), None);
    }

    #[test]
    fn case_walks_down_the_list() {
        let describe = |v: Value| {
            v.case(
                |rest| rest.case(|rest| rest.into_inner().to_string(), |d| std::format!("f{d}")),
                |s| s,
            )
        };

        assert_eq!(describe(Value::new("s".to_string())), "s");
        assert_eq!(describe(Value::new(2.5)), "f2.5");
        assert_eq!(describe(Value::new(-1)), "-1");
    }
}
