//! Type lists and the union type they describe.

use crate::{
    interpret::Interpret,
    union::{Cons, Nil},
};

/// A list of alternatives, written as nested pairs terminated by `()`.
///
/// See [`T!`](crate::T) for a shorthand.
pub trait TypeList {
    /// The number of alternatives.
    const LEN: usize;

    /// The union over this list with every alternative wrapped by `F`.
    type Union<F: Interpret>;
}

impl TypeList for () {
    const LEN: usize = 0;
    type Union<F: Interpret> = Nil;
}

impl<Head, Tail> TypeList for (Head, Tail)
where
    Tail: TypeList,
{
    const LEN: usize = 1 + Tail::LEN;
    type Union<F: Interpret> = Cons<F, Head, Tail::Union<F>>;
}

/// The union over the type list `L` with every alternative wrapped by `F`.
///
/// The macro form [`Union!`](macro@crate::Union) expands to the same type.
pub type Union<F, L> = <L as TypeList>::Union<F>;
