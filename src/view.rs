//! Reversible views into unions.
//!
//! A [`View`] packs a way to build a whole from a part together with a way to
//! try to get the part back out. [`Membership`] is the view of one
//! alternative of a union, and views compose with [`View::then`] to reach
//! into unions nested inside unions:
//!
//! ```rust
//! use tunion::{view::View, OpenUnion};
//!
//! type Inner = OpenUnion![u8, char];
//! type Outer = OpenUnion![String, Inner];
//!
//! let to_char = Outer::view::<Inner, _>().then(Inner::view::<char, _>());
//!
//! let outer = to_char.review('x');
//! assert_eq!(to_char.preview(outer).ok(), Some('x'));
//!
//! let other = Outer::new("not a char".to_string());
//! assert!(to_char.preview(other).is_err());
//! ```

use core::marker::PhantomData;

use crate::{
    index::Index,
    interpret::Interpret,
    member::Member,
    union::Cons,
};

/// A reversible conversion from a part into a whole that may fail the other
/// way.
pub trait View {
    type Whole;
    type Part;

    /// Builds the whole from a part.
    fn review(&self, part: Self::Part) -> Self::Whole;

    /// Gets the part back, or returns the whole untouched.
    fn preview(&self, whole: Self::Whole) -> Result<Self::Part, Self::Whole>;

    /// Focuses further into the part through `inner`.
    fn then<V>(self, inner: V) -> Compose<Self, V>
    where
        Self: Sized,
        V: View<Whole = Self::Part>,
    {
        Compose { outer: self, inner }
    }
}

/// The view of alternative `T` at position `I` of the union `U` under
/// interpretation `F`.
pub struct Membership<U, F, T, I>(PhantomData<fn() -> (U, F, T, I)>);

impl<U, F, T, I> Membership<U, F, T, I> {
    pub const fn new() -> Self {
        Membership(PhantomData)
    }
}

impl<U, F, T, I> Clone for Membership<U, F, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, F, T, I> Copy for Membership<U, F, T, I> {}

impl<U, F, T, I> View for Membership<U, F, T, I>
where
    U: Member<F, T, I>,
    F: Interpret,
    I: Index,
{
    type Whole = U;
    type Part = F::Apply<T>;

    fn review(&self, part: F::Apply<T>) -> U {
        U::lift(part)
    }

    fn preview(&self, whole: U) -> Result<F::Apply<T>, U> {
        whole.split().map_err(U::unsplit)
    }
}

/// The view of the head alternative of the union `U`.
pub struct HeadView<U>(PhantomData<fn() -> U>);

impl<F: Interpret, H, T> View for HeadView<Cons<F, H, T>> {
    type Whole = Cons<F, H, T>;
    type Part = F::Apply<H>;

    fn review(&self, part: F::Apply<H>) -> Cons<F, H, T> {
        Cons::This(part)
    }

    fn preview(&self, whole: Cons<F, H, T>) -> Result<F::Apply<H>, Cons<F, H, T>> {
        match whole {
            Cons::This(head) => Ok(head),
            other => Err(other),
        }
    }
}

/// The view of the remaining alternatives of the union `U`.
pub struct TailView<U>(PhantomData<fn() -> U>);

impl<F: Interpret, H, T> View for TailView<Cons<F, H, T>> {
    type Whole = Cons<F, H, T>;
    type Part = T;

    fn review(&self, part: T) -> Cons<F, H, T> {
        Cons::That(part)
    }

    fn preview(&self, whole: Cons<F, H, T>) -> Result<T, Cons<F, H, T>> {
        match whole {
            Cons::That(tail) => Ok(tail),
            other => Err(other),
        }
    }
}

/// Two views chained together, see [`View::then`].
pub struct Compose<O, V> {
    outer: O,
    inner: V,
}

impl<O, V> View for Compose<O, V>
where
    O: View,
    V: View<Whole = O::Part>,
{
    type Whole = O::Whole;
    type Part = V::Part;

    fn review(&self, part: V::Part) -> O::Whole {
        self.outer.review(self.inner.review(part))
    }

    fn preview(&self, whole: O::Whole) -> Result<V::Part, O::Whole> {
        let part = self.outer.preview(whole)?;
        self.inner.preview(part).map_err(|part| self.outer.review(part))
    }
}

impl<F: Interpret, H, T> Cons<F, H, T> {
    /// The view of alternative `X`.
    pub fn view<X, I>() -> Membership<Self, F, X, I>
    where
        Self: Member<F, X, I>,
        I: Index,
    {
        Membership::new()
    }

    pub fn head_view() -> HeadView<Self> {
        HeadView(PhantomData)
    }

    pub fn tail_view() -> TailView<Self> {
        TailView(PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;
    use crate::{index::U1, Identity, OpenUnion};

    type Value = OpenUnion![String, f64, i32];

    #[test]
    fn membership_round_trip() {
        let view = Value::view::<f64, _>();

        let v = view.review(3.3);
        assert_eq!(v.position(), 1);
        assert_eq!(view.preview(v), Ok(3.3));
    }

    #[test]
    fn membership_preview_returns_source() {
        let view = Membership::<Value, Identity, f64, U1>::new();

        let v = Value::new(5);
        assert_eq!(view.preview(v.clone()).unwrap_err(), v);
    }

    #[test]
    fn head_and_tail() {
        let head = Value::head_view().preview(Value::new("s".to_string()));
        assert_eq!(head.as_deref(), Ok("s"));

        let tail = Value::tail_view().preview(Value::new(1));
        assert_eq!(tail.map(|t| t.position()), Ok(1));

        let through = Value::tail_view().then(<OpenUnion![f64, i32]>::head_view());
        let built = through.review(0.5);
        assert_eq!(built, Value::new(0.5));
        assert_eq!(through.preview(Value::new(2)), Err(Value::new(2)));
    }

    #[test]
    fn nested_unions() {
        type Inner = OpenUnion![u8, char];
        type Outer = OpenUnion![String, Inner];

        let to_char = Outer::view::<Inner, _>().then(Inner::view::<char, _>());

        let outer = to_char.review('x');
        assert_eq!(outer.get::<Inner, _>().and_then(|i| i.get::<char, _>()), Some(&'x'));

        // The inner union holds the other alternative: the outer value comes back whole.
        let outer = Outer::new(Inner::new(1u8));
        assert_eq!(to_char.preview(outer.clone()), Err(outer));
    }
}
