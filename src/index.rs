//! Type-level positions and the resolver that finds a type in a type list.
//!
//! A position is a unary natural number: [`UTerm`] is zero and [`UInt<U>`] is
//! the successor of `U`. The resolver [`IndexOf`] is only implemented when the
//! requested type actually occurs in the list, so asking for a missing type is
//! rejected by the compiler:
//!
//! ```rust,compile_fail
//! use tunion::{index::IndexOf, T};
//!
//! fn position<L: IndexOf<T, I>, T, I: tunion::index::Index>() -> usize {
//!     L::POSITION
//! }
//!
//! // `u8` is not an alternative.
//! let _ = position::<T![i32, f64], u8, _>();
//! ```

use core::marker::PhantomData;

/// Type-level zero.
pub struct UTerm;

/// Type-level successor of `U`.
pub struct UInt<U>(PhantomData<U>);

/// A type-level position with its value-level counterpart.
pub trait Index {
    const VALUE: usize;
}

impl Index for UTerm {
    const VALUE: usize = 0;
}

impl<U: Index> Index for UInt<U> {
    const VALUE: usize = 1 + U::VALUE;
}

#[allow(missing_docs)]
mod aliases {
    use super::*;

    pub type U0 = UTerm;
    pub type U1 = UInt<U0>;
    pub type U2 = UInt<U1>;
    pub type U3 = UInt<U2>;
    pub type U4 = UInt<U3>;
    pub type U5 = UInt<U4>;
    pub type U6 = UInt<U5>;
    pub type U7 = UInt<U6>;
    pub type U8 = UInt<U7>;
    pub type U9 = UInt<U8>;

    pub type U10 = UInt<U9>;
    pub type U11 = UInt<U10>;
    pub type U12 = UInt<U11>;
}

pub use self::aliases::*;

/// Resolves the position `I` of type `T` in the type list `Self`.
///
/// The head of the list sits at [`UTerm`]; anything found in the tail at `I`
/// sits at `UInt<I>`. There is no implementation for `()`, which makes a
/// lookup that runs off the end of the list a type error.
///
/// If `T` occurs more than once, the compiler cannot choose an index by
/// itself and `I` has to be spelled out; the first occurrence is the smallest
/// index that resolves.
pub trait IndexOf<T, I: Index> {
    /// The zero-based position of `T`.
    const POSITION: usize = I::VALUE;
}

impl<Head, Tail> IndexOf<Head, UTerm> for (Head, Tail) {}

impl<Head, Tail, T, I: Index> IndexOf<T, UInt<I>> for (Head, Tail) where Tail: IndexOf<T, I> {}

/// Returns the position of `T` in the type list `L`.
///
/// # Examples
///
/// ```rust
/// use tunion::{index::position_of, T};
///
/// assert_eq!(position_of::<T![String, f64, i32], f64, _>(), 1);
/// ```
pub fn position_of<L, T, I>() -> usize
where
    L: IndexOf<T, I>,
    I: Index,
{
    L::POSITION
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;

    type List = crate::T![String, f64, i32];

    #[test]
    fn resolves_each_alternative() {
        assert_eq!(position_of::<List, String, _>(), 0);
        assert_eq!(position_of::<List, f64, _>(), 1);
        assert_eq!(position_of::<List, i32, _>(), 2);
    }

    #[test]
    fn duplicates_need_an_explicit_index() {
        type Dup = crate::T![u8, i32, u8];

        assert_eq!(position_of::<Dup, u8, U0>(), 0);
        assert_eq!(position_of::<Dup, u8, U2>(), 2);
        assert_eq!(position_of::<Dup, i32, _>(), 1);
    }

    #[test]
    fn index_values() {
        assert_eq!(U0::VALUE, 0);
        assert_eq!(U5::VALUE, 5);
        assert_eq!(U12::VALUE, 12);
    }
}
