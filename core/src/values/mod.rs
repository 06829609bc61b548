//! The dynamic value model.
//!
//! Everything a type hands out to its instances is a [`Value`]: plain data,
//! shared [`Object`] references, native [`Method`]s, or other [`Type`]s.
//!
//! [`Type`]: crate::types::Type

pub mod behavior;
pub mod dynamic;
pub mod function;
pub mod object;

pub use behavior::{Behavior, Decoratable, Name, Overwrite, decorate};
pub use dynamic::Value;
pub use function::{Method, NativeFn};
pub use object::{Object, ObjectRef, hide};
