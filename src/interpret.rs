//! Interpretations: the single-type wrappers applied to every alternative.

/// A type-level function from an alternative `T` to the type actually stored
/// in the union.
///
/// A union over `[T0, T1, ..]` interpreted by `F` holds exactly one of
/// `F::Apply<T0>`, `F::Apply<T1>`, ...
///
/// # Examples
///
/// ```rust
/// use tunion::{Interpret, Union};
///
/// struct Maybe;
///
/// impl Interpret for Maybe {
///     type Apply<T> = Option<T>;
/// }
///
/// type U = Union![Maybe; i32, char];
///
/// let u = U::lift::<char, _>(Some('x'));
/// assert_eq!(u.project::<char, _>(), Some(Some('x')));
/// assert_eq!(U::lift::<i32, _>(None).project::<char, _>(), None);
/// ```
pub trait Interpret {
    type Apply<T>;
}

/// The interpretation that stores alternatives as they are.
///
/// Unions under this interpretation are the [open unions](crate::open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity;

impl Interpret for Identity {
    type Apply<T> = T;
}

/// A polymorphic transform between two interpretations, used by
/// [`Remap`](crate::union::Remap).
///
/// It must work for every alternative type, so it cannot be a closure.
pub trait Transform<F: Interpret, G: Interpret> {
    fn transform<T>(&mut self, value: F::Apply<T>) -> G::Apply<T>;
}
