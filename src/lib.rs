#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]

#[cfg(test)]
extern crate std;

#[cfg(feature = "serde")]
mod codec;
mod derive;
pub mod error;
pub mod index;
pub mod interpret;
pub mod list;
mod macros;
pub mod member;
pub mod open;
pub mod range;
mod text;
pub mod union;
pub mod view;

pub use self::{
    error::UnionError,
    interpret::{Identity, Interpret, Transform},
    list::{TypeList, Union},
    member::Member,
    open::OpenUnion,
    union::{Cons, Coproduct, Nil},
};
