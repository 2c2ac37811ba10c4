//! Membership: injecting into and projecting out of a union at a resolved
//! position.
//!
//! `Cons<F, ..>: Member<F, T, I>` holds exactly when `T` is the alternative at
//! position `I`, so the impl itself is the proof of membership. The index is
//! almost always left for the compiler to infer:
//!
//! ```rust
//! use tunion::{Identity, Union};
//!
//! type U = Union![Identity; String, i32];
//!
//! let u = U::lift::<String, _>("hello".to_string());
//! assert_eq!(u.get::<String, _>().map(String::as_str), Some("hello"));
//! assert_eq!(u.project::<i32, _>(), None);
//! ```
//!
//! Asking for an alternative that is not in the list does not compile:
//!
//! ```rust,compile_fail
//! use tunion::{Identity, Union};
//!
//! type U = Union![Identity; String, i32];
//!
//! let u = U::lift::<u8, _>(1);
//! ```

use crate::{
    index::{Index, IndexOf, UInt, UTerm},
    interpret::Interpret,
    union::{Coproduct, Cons},
};

/// The trait that union types implement for each alternative `T` they hold at
/// position `I`.
pub trait Member<F: Interpret, T, I: Index>: Sized {
    /// The zero-based position of `T`.
    const POSITION: usize = I::VALUE;

    /// The union over the alternatives other than the one at `I`.
    type Remainder;

    /// The union with the alternative at `I` replaced by `T2`.
    type Substitute<T2>: Member<F, T2, I>;

    /// Injects a value at position `I`.
    fn lift(value: F::Apply<T>) -> Self;

    /// Takes the value out if the union is populated at `I`; otherwise returns
    /// the same value as a union over the other alternatives.
    fn split(self) -> Result<F::Apply<T>, Self::Remainder>;

    /// Puts a remainder back into the full union.
    fn unsplit(remainder: Self::Remainder) -> Self;

    fn get(&self) -> Option<&F::Apply<T>>;

    fn get_mut(&mut self) -> Option<&mut F::Apply<T>>;

    /// Replaces the value at `I` through `f`, keeping other values as they
    /// are.
    fn substitute<T2>(self, f: impl FnOnce(F::Apply<T>) -> F::Apply<T2>) -> Self::Substitute<T2>;

    /// Takes the value out if the union is populated at `I`.
    fn project(self) -> Option<F::Apply<T>> {
        self.split().ok()
    }
}

impl<F: Interpret, Head, Tail> Member<F, Head, UTerm> for Cons<F, Head, Tail> {
    type Remainder = Tail;
    type Substitute<T2> = Cons<F, T2, Tail>;

    fn lift(value: F::Apply<Head>) -> Self {
        Cons::This(value)
    }

    fn split(self) -> Result<F::Apply<Head>, Tail> {
        match self {
            Cons::This(head) => Ok(head),
            Cons::That(tail) => Err(tail),
        }
    }

    fn unsplit(remainder: Tail) -> Self {
        Cons::That(remainder)
    }

    fn get(&self) -> Option<&F::Apply<Head>> {
        match self {
            Cons::This(head) => Some(head),
            Cons::That(_) => None,
        }
    }

    fn get_mut(&mut self) -> Option<&mut F::Apply<Head>> {
        match self {
            Cons::This(head) => Some(head),
            Cons::That(_) => None,
        }
    }

    fn substitute<T2>(
        self,
        f: impl FnOnce(F::Apply<Head>) -> F::Apply<T2>,
    ) -> Cons<F, T2, Tail> {
        match self {
            Cons::This(head) => Cons::This(f(head)),
            Cons::That(tail) => Cons::That(tail),
        }
    }
}

impl<F: Interpret, Head, Tail, T, I: Index> Member<F, T, UInt<I>> for Cons<F, Head, Tail>
where
    Tail: Member<F, T, I>,
{
    type Remainder = Cons<F, Head, Tail::Remainder>;
    type Substitute<T2> = Cons<F, Head, Tail::Substitute<T2>>;

    fn lift(value: F::Apply<T>) -> Self {
        Cons::That(Tail::lift(value))
    }

    fn split(self) -> Result<F::Apply<T>, Self::Remainder> {
        match self {
            // Populated at a smaller position than the one requested.
            Cons::This(head) => Err(Cons::This(head)),
            Cons::That(tail) => tail.split().map_err(Cons::That),
        }
    }

    fn unsplit(remainder: Self::Remainder) -> Self {
        match remainder {
            Cons::This(head) => Cons::This(head),
            Cons::That(rest) => Cons::That(Tail::unsplit(rest)),
        }
    }

    fn get(&self) -> Option<&F::Apply<T>> {
        match self {
            Cons::This(_) => None,
            Cons::That(tail) => tail.get(),
        }
    }

    fn get_mut(&mut self) -> Option<&mut F::Apply<T>> {
        match self {
            Cons::This(_) => None,
            Cons::That(tail) => tail.get_mut(),
        }
    }

    fn substitute<T2>(self, f: impl FnOnce(F::Apply<T>) -> F::Apply<T2>) -> Self::Substitute<T2> {
        match self {
            Cons::This(head) => Cons::This(head),
            Cons::That(tail) => Cons::That(tail.substitute(f)),
        }
    }
}

pub type Rem<U, F, T, I> = <U as Member<F, T, I>>::Remainder;
pub type Substitute<U, F, T, T2, I> = <U as Member<F, T, I>>::Substitute<T2>;

impl<F: Interpret, H, Tail> Cons<F, H, Tail> {
    /// Injects a value of alternative `T`.
    ///
    /// `T` cannot be inferred from `F::Apply<T>` in general, so it is usually
    /// given explicitly; [open unions](crate::open) have [`new`](Cons::new)
    /// instead.
    pub fn lift<T, I>(value: F::Apply<T>) -> Self
    where
        Self: Member<F, T, I>,
        I: Index,
    {
        <Self as Member<F, T, I>>::lift(value)
    }

    /// Returns the value of alternative `T` if that is the one populated.
    pub fn project<T, I>(self) -> Option<F::Apply<T>>
    where
        Self: Member<F, T, I>,
        I: Index,
    {
        <Self as Member<F, T, I>>::project(self)
    }

    /// Returns the value of alternative `T`, or the union over the other
    /// alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tunion::OpenUnion;
    ///
    /// let u = <OpenUnion![String, f64, i32]>::new(3);
    /// let rest = u.split::<String, _>().unwrap_err();
    /// assert_eq!(rest.split::<i32, _>().ok(), Some(3));
    /// ```
    pub fn split<T, I>(self) -> Result<F::Apply<T>, Rem<Self, F, T, I>>
    where
        Self: Member<F, T, I>,
        I: Index,
    {
        <Self as Member<F, T, I>>::split(self)
    }

    pub fn get<T, I>(&self) -> Option<&F::Apply<T>>
    where
        Self: Member<F, T, I>,
        I: Index,
    {
        <Self as Member<F, T, I>>::get(self)
    }

    pub fn get_mut<T, I>(&mut self) -> Option<&mut F::Apply<T>>
    where
        Self: Member<F, T, I>,
        I: Index,
    {
        <Self as Member<F, T, I>>::get_mut(self)
    }

    /// Maps the alternative `T` to a new alternative `T2`.
    pub fn map<T, T2, I>(
        self,
        f: impl FnOnce(F::Apply<T>) -> F::Apply<T2>,
    ) -> Substitute<Self, F, T, T2, I>
    where
        Self: Member<F, T, I>,
        I: Index,
    {
        <Self as Member<F, T, I>>::substitute(self, f)
    }

    /// Returns the position of alternative `T`, the same number the resolver
    /// computes for the alternative list.
    pub fn position_of<T, I>() -> usize
    where
        Self: Member<F, T, I> + Coproduct,
        <Self as Coproduct>::List: IndexOf<T, I>,
        I: Index,
    {
        debug_assert_eq!(
            <Self as Member<F, T, I>>::POSITION,
            <<Self as Coproduct>::List as IndexOf<T, I>>::POSITION,
        );
        <Self as Member<F, T, I>>::POSITION
    }
}
