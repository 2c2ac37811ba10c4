//! The union value and its elimination.
//!
//! # Representation
//!
//! A union over `[T0, T1, .., Tn]` interpreted by `F` is a chain of [`Cons`]
//! cells ending in [`Nil`]:
//!
//! ```text
//! Cons<F, T0, Cons<F, T1, .. Cons<F, Tn, Nil> ..>>
//! ```
//!
//! `This` means the value is the cell's own alternative; `That` defers to the
//! union over the remaining alternatives. `Nil` has no variants at all, so a
//! union over the empty list cannot be built and every operation on it is an
//! empty `match`.

use crate::{
    interpret::{Interpret, Transform},
    list::TypeList,
};

/// The union over the empty list of alternatives. It has no values.
pub enum Nil {}

impl Nil {
    /// Turns the impossible into anything.
    pub fn absurd<R>(self) -> R {
        match self {}
    }
}

/// The union over a non-empty list: either its head alternative `H` wrapped
/// by `F`, or the union `T` over the rest of the list.
pub enum Cons<F: Interpret, H, T> {
    /// The value is the head alternative.
    This(F::Apply<H>),
    /// The value is one of the remaining alternatives.
    That(T),
}

impl<F: Interpret, H, T> Cons<F, H, T> {
    /// Case-splits on the union: `on_this` receives the head value, `on_that`
    /// the union over the remaining alternatives. Exactly one of them runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tunion::OpenUnion;
    ///
    /// let u = <OpenUnion![i32, bool]>::new(true);
    /// let described = u.eliminate(
    ///     |rest| format!("rest: {}", rest.into_inner()),
    ///     |n| format!("int: {n}"),
    /// );
    /// assert_eq!(described, "rest: true");
    /// ```
    pub fn eliminate<R>(
        self,
        on_that: impl FnOnce(T) -> R,
        on_this: impl FnOnce(F::Apply<H>) -> R,
    ) -> R {
        match self {
            Cons::This(head) => on_this(head),
            Cons::That(tail) => on_that(tail),
        }
    }

    pub fn is_this(&self) -> bool {
        matches!(self, Cons::This(_))
    }

    pub fn is_that(&self) -> bool {
        matches!(self, Cons::That(_))
    }

    /// Returns the zero-based position of the populated alternative.
    pub fn position(&self) -> usize
    where
        Self: Coproduct,
    {
        Coproduct::position(self)
    }

    /// Rewraps every alternative from interpretation `F` to `G` without
    /// changing which one is populated.
    pub fn remap<G, N>(self, transform: &mut N) -> <Self as Remap<F, G>>::Output
    where
        G: Interpret,
        N: Transform<F, G>,
        Self: Remap<F, G>,
    {
        Remap::remap(self, transform)
    }

    /// Exhaustively folds the union with one handler per alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tunion::{t, OpenUnion};
    ///
    /// let u = <OpenUnion![String, f64, i32]>::new(2.5f64);
    /// let n = u.fold(t![|s: String| s.len() as f64, |x: f64| x * 2.0, |i: i32| i as f64]);
    /// assert_eq!(n, 5.0);
    /// ```
    pub fn fold<Fs, R>(self, handlers: Fs) -> R
    where
        Self: Fold<Fs, R>,
    {
        Fold::fold(self, handlers)
    }
}

impl<F: Interpret, H> Cons<F, H, Nil> {
    /// Unwraps a union over a single alternative.
    pub fn into_inner(self) -> F::Apply<H> {
        match self {
            Cons::This(head) => head,
            Cons::That(nil) => nil.absurd(),
        }
    }
}

/// Static description of a union type.
pub trait Coproduct: Sized {
    /// The alternatives of the union.
    type List: TypeList;

    /// The number of alternatives.
    const ARITY: usize = <Self::List as TypeList>::LEN;

    #[doc(hidden)]
    fn position(&self) -> usize;
}

impl Coproduct for Nil {
    type List = ();

    fn position(&self) -> usize {
        match *self {}
    }
}

impl<F: Interpret, H, T: Coproduct> Coproduct for Cons<F, H, T> {
    type List = (H, T::List);

    fn position(&self) -> usize {
        match self {
            Cons::This(_) => 0,
            Cons::That(tail) => 1 + tail.position(),
        }
    }
}

/// Uniform rewrapping from interpretation `F` to `G`.
pub trait Remap<F: Interpret, G: Interpret> {
    /// The same union with every alternative wrapped by `G`.
    type Output;

    fn remap<N: Transform<F, G>>(self, transform: &mut N) -> Self::Output;
}

impl<F: Interpret, G: Interpret> Remap<F, G> for Nil {
    type Output = Nil;

    fn remap<N: Transform<F, G>>(self, _: &mut N) -> Nil {
        self.absurd()
    }
}

impl<F: Interpret, G: Interpret, H, T> Remap<F, G> for Cons<F, H, T>
where
    T: Remap<F, G>,
{
    type Output = Cons<G, H, T::Output>;

    fn remap<N: Transform<F, G>>(self, transform: &mut N) -> Self::Output {
        match self {
            Cons::This(head) => Cons::This(transform.transform::<H>(head)),
            Cons::That(tail) => Cons::That(tail.remap(transform)),
        }
    }
}

/// Exhaustive case analysis with a type list of handlers, one per
/// alternative, all returning `R`.
pub trait Fold<Fs, R> {
    fn fold(self, handlers: Fs) -> R;
}

impl<R> Fold<(), R> for Nil {
    fn fold(self, _: ()) -> R {
        self.absurd()
    }
}

impl<F: Interpret, H, T, FH, FT, R> Fold<(FH, FT), R> for Cons<F, H, T>
where
    FH: FnOnce(F::Apply<H>) -> R,
    T: Fold<FT, R>,
{
    fn fold(self, (on_head, on_tail): (FH, FT)) -> R {
        match self {
            Cons::This(head) => on_head(head),
            Cons::That(tail) => tail.fold(on_tail),
        }
    }
}
