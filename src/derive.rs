//! Structural trait implementations.
//!
//! Every implementation has the same shape: on [`Nil`] it is an empty match,
//! and on [`Cons`] it needs the trait on the wrapped head and on the tail.
//! A union implements a trait exactly when all of its alternatives do.
//!
//! Ordering puts earlier alternatives first: any value at position `i` is less
//! than any value at position `j > i`, whatever the values themselves are.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    interpret::Interpret,
    union::{Cons, Nil},
};

impl Clone for Nil {
    fn clone(&self) -> Self {
        match *self {}
    }
}

impl Copy for Nil {}

impl<F: Interpret, H, T> Clone for Cons<F, H, T>
where
    F::Apply<H>: Clone,
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Cons::This(head) => Cons::This(head.clone()),
            Cons::That(tail) => Cons::That(tail.clone()),
        }
    }
}

impl<F: Interpret, H, T> Copy for Cons<F, H, T>
where
    F::Apply<H>: Copy,
    T: Copy,
{
}

impl PartialEq for Nil {
    fn eq(&self, _: &Self) -> bool {
        match *self {}
    }
}

impl Eq for Nil {}

impl<F: Interpret, H, T> PartialEq for Cons<F, H, T>
where
    F::Apply<H>: PartialEq,
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cons::This(a), Cons::This(b)) => a == b,
            (Cons::That(a), Cons::That(b)) => a == b,
            _ => false,
        }
    }
}

impl<F: Interpret, H, T> Eq for Cons<F, H, T>
where
    F::Apply<H>: Eq,
    T: Eq,
{
}

impl PartialOrd for Nil {
    fn partial_cmp(&self, _: &Self) -> Option<Ordering> {
        match *self {}
    }
}

impl Ord for Nil {
    fn cmp(&self, _: &Self) -> Ordering {
        match *self {}
    }
}

impl<F: Interpret, H, T> PartialOrd for Cons<F, H, T>
where
    F::Apply<H>: PartialOrd,
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cons::This(a), Cons::This(b)) => a.partial_cmp(b),
            (Cons::This(_), Cons::That(_)) => Some(Ordering::Less),
            (Cons::That(_), Cons::This(_)) => Some(Ordering::Greater),
            (Cons::That(a), Cons::That(b)) => a.partial_cmp(b),
        }
    }
}

impl<F: Interpret, H, T> Ord for Cons<F, H, T>
where
    F::Apply<H>: Ord,
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cons::This(a), Cons::This(b)) => a.cmp(b),
            (Cons::This(_), Cons::That(_)) => Ordering::Less,
            (Cons::That(_), Cons::This(_)) => Ordering::Greater,
            (Cons::That(a), Cons::That(b)) => a.cmp(b),
        }
    }
}

impl Hash for Nil {
    fn hash<S: Hasher>(&self, _: &mut S) {
        match *self {}
    }
}

impl<F: Interpret, H, T> Hash for Cons<F, H, T>
where
    F::Apply<H>: Hash,
    T: Hash,
{
    fn hash<S: Hasher>(&self, state: &mut S) {
        match self {
            Cons::This(head) => {
                0u8.hash(state);
                head.hash(state);
            }
            Cons::That(tail) => {
                1u8.hash(state);
                tail.hash(state);
            }
        }
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

/// Shows the constructor path, e.g. `That(This(3.3))`.
impl<F: Interpret, H, T> fmt::Debug for Cons<F, H, T>
where
    F::Apply<H>: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cons::This(head) => f.debug_tuple("This").field(head).finish(),
            Cons::That(tail) => f.debug_tuple("That").field(tail).finish(),
        }
    }
}

impl fmt::Display for Nil {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

/// Shows the populated alternative as it shows itself, so that the output
/// parses back through [`FromStr`](core::str::FromStr).
impl<F: Interpret, H, T> fmt::Display for Cons<F, H, T>
where
    F::Apply<H>: fmt::Display,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cons::This(head) => head.fmt(f),
            Cons::That(tail) => tail.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    use super::*;
    use crate::OpenUnion;

    type Value = OpenUnion![String, f64, i32];

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality() {
        let a = Value::new(3.3);
        assert_eq!(a, a.clone());
        assert_eq!(a, Value::new(3.3));
        assert_ne!(a, Value::new(3.4));
        assert_ne!(Value::new(3), Value::new(3.0));
        assert_ne!(Value::new("3".to_string()), Value::new(3));
    }

    #[test]
    fn ordering_by_position_first() {
        let s = Value::new("anything".to_string());
        let d = Value::new(3.3);
        let i = Value::new(i32::MIN);

        assert!(d > s);
        assert!(d < i);
        assert!(s < i);
        assert!(Value::new(1.0) < Value::new(2.0));
        assert!(Value::new(f64::NAN).partial_cmp(&Value::new(f64::NAN)).is_none());
    }

    #[test]
    fn total_order_sorts() {
        type Key = OpenUnion![char, u8];

        let mut keys: Vec<Key> = vec![Key::new(3u8), Key::new('b'), Key::new(1u8), Key::new('a')];
        keys.sort();

        let expected = vec![Key::new('a'), Key::new('b'), Key::new(1u8), Key::new(3u8)];
        assert_eq!(keys, expected);
    }

    #[test]
    fn hash_separates_positions() {
        type Dup = OpenUnion![u8, u8];

        let first = Dup::lift::<u8, crate::index::U0>(5);
        let second = Dup::lift::<u8, crate::index::U1>(5);

        assert_ne!(first, second);
        assert_ne!(hash_of(&first), hash_of(&second));
        assert_eq!(hash_of(&first), hash_of(&first.clone()));
    }

    #[test]
    fn copy_when_all_alternatives_are() {
        type Small = OpenUnion![u8, char];

        let a = Small::new('x');
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn debug_shows_constructors() {
        assert_eq!(format!("{:?}", Value::new(3.3)), "That(This(3.3))");
        assert_eq!(format!("{:?}", Value::new("s".to_string())), "This(\"s\")");
    }

    #[test]
    fn display_shows_value() {
        assert_eq!(Value::new(3.3).to_string(), "3.3");
        assert_eq!(Value::new("hello".to_string()).to_string(), "hello");
        assert_eq!(Value::new(-2).to_string(), "-2");
    }
}
