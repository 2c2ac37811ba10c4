//! Parsing unions from text.
//!
//! Alternatives are tried in list order and the first one that parses wins,
//! so the order of the list is the priority between overlapping textual
//! representations:
//!
//! ```rust
//! use tunion::OpenUnion;
//!
//! let u: OpenUnion![f64, String] = "3.3".parse().unwrap();
//! assert_eq!(u.extract::<f64, _>(), Some(3.3));
//!
//! let u: OpenUnion![String, f64] = "3.3".parse().unwrap();
//! assert_eq!(u.extract::<String, _>().as_deref(), Some("3.3"));
//! ```

use core::str::FromStr;

use crate::{
    error::UnionError,
    interpret::Interpret,
    union::{Coproduct, Cons, Nil},
};

impl FromStr for Nil {
    type Err = UnionError;

    fn from_str(_: &str) -> Result<Self, UnionError> {
        Err(UnionError::Uninhabited)
    }
}

impl<F: Interpret, H, T> FromStr for Cons<F, H, T>
where
    F::Apply<H>: FromStr,
    T: FromStr + Coproduct,
{
    type Err = UnionError;

    fn from_str(s: &str) -> Result<Self, UnionError> {
        if let Ok(head) = s.parse::<F::Apply<H>>() {
            return Ok(Cons::This(head));
        }
        match s.parse::<T>() {
            Ok(tail) => Ok(Cons::That(tail)),
            Err(_) => Err(UnionError::NoAlternative { arity: Self::ARITY }),
        }
    }
}
