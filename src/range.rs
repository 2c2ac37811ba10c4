//! Re-wrapping a union as a union over a related list of alternatives.
//!
//! [`Broaden`] embeds a union into one over a superset of its alternatives,
//! and [`Narrow`] tries the opposite, handing back the value as a union over
//! the leftover alternatives when it does not fit. Both take a list of
//! indices, one per alternative of the smaller union, which is inferred
//! unless an alternative occurs more than once.
//!
//! ```rust
//! use tunion::OpenUnion;
//!
//! type Small = OpenUnion![i32, String];
//! type Big = OpenUnion![String, f64, i32];
//!
//! let big: Big = Small::new(7).broaden();
//! assert_eq!(big.get::<i32, _>(), Some(&7));
//!
//! let small: Small = big.narrow().unwrap();
//! assert_eq!(small.extract::<i32, _>(), Some(7));
//!
//! let rest = Big::new(0.5).narrow::<Small, _>().unwrap_err();
//! assert_eq!(rest.into_inner(), 0.5);
//! ```

use crate::{
    index::Index,
    interpret::Interpret,
    member::Member,
    union::{Cons, Nil},
};

/// The trait that unions implement to be embedded into a union `Target`
/// containing all of their alternatives. `Indices` lists the position in
/// `Target` of every alternative of `Self`.
pub trait Broaden<Target, Indices> {
    fn broaden(self) -> Target;
}

impl<Target> Broaden<Target, ()> for Nil {
    fn broaden(self) -> Target {
        self.absurd()
    }
}

impl<F: Interpret, H, T, Target, I: Index, Is> Broaden<Target, (I, Is)> for Cons<F, H, T>
where
    Target: Member<F, H, I>,
    T: Broaden<Target, Is>,
{
    fn broaden(self) -> Target {
        match self {
            Cons::This(head) => Target::lift(head),
            Cons::That(tail) => tail.broaden(),
        }
    }
}

/// The trait that unions implement to be narrowed down to a union `Target`
/// over a subset of their alternatives. `Indices` lists, for every
/// alternative of `Target` in turn, its position among the alternatives of
/// `Self` still left after the previous ones were taken out.
pub trait Narrow<Target, Indices>: Sized {
    /// The union over the alternatives of `Self` that are not in `Target`.
    type Remainder;

    fn narrow(self) -> Result<Target, Self::Remainder>;
}

impl<S> Narrow<Nil, ()> for S {
    type Remainder = S;

    fn narrow(self) -> Result<Nil, S> {
        Err(self)
    }
}

impl<F: Interpret, H, T, S, I: Index, Is> Narrow<Cons<F, H, T>, (I, Is)> for S
where
    S: Member<F, H, I>,
    <S as Member<F, H, I>>::Remainder: Narrow<T, Is>,
{
    type Remainder = <<S as Member<F, H, I>>::Remainder as Narrow<T, Is>>::Remainder;

    fn narrow(self) -> Result<Cons<F, H, T>, Self::Remainder> {
        match <S as Member<F, H, I>>::split(self) {
            Ok(head) => Ok(Cons::This(head)),
            Err(rest) => {
                <<S as Member<F, H, I>>::Remainder as Narrow<T, Is>>::narrow(rest).map(Cons::That)
            }
        }
    }
}

pub type NarrowRem<S, Target, Indices> = <S as Narrow<Target, Indices>>::Remainder;

impl<F: Interpret, H, T> Cons<F, H, T> {
    /// Embeds the union into a union over a superset of its alternatives.
    pub fn broaden<Target, Indices>(self) -> Target
    where
        Self: Broaden<Target, Indices>,
    {
        <Self as Broaden<Target, Indices>>::broaden(self)
    }

    /// Re-wraps the union as a union over a subset of its alternatives, or
    /// returns it as a union over the other alternatives.
    pub fn narrow<Target, Indices>(self) -> Result<Target, NarrowRem<Self, Target, Indices>>
    where
        Self: Narrow<Target, Indices>,
    {
        <Self as Narrow<Target, Indices>>::narrow(self)
    }
}
