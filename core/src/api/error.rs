//! Public error type.
//!
//! Every fallible operation of the crate returns [`Error`]. Malformed but
//! harmless input (a missing constructor, empty maps) falls back to a default
//! instead of failing; the variants below cover the cases where continuing
//! would leave a type graph or an object in an inconsistent state.

use crate::values::Name;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid API usage (e.g. registering an unnamed type).
    #[error("API error: {0}")]
    Api(String),

    /// The reserved constructor entry of a behavior map is not a method.
    #[error("`{key}` must be a method, found {found}")]
    InitNotCallable { key: Name, found: &'static str },

    /// A member was called but holds a non-method value.
    #[error("`{name}` is not callable, found {found}")]
    NotCallable { name: Name, found: &'static str },

    /// A member was called but does not exist.
    #[error("unknown member `{0}`")]
    UnknownMember(Name),

    /// Including `mixin` into `target` would make `has` non-terminating.
    #[error("including {mixin} into {target} would form a cycle")]
    CyclicInclude { target: String, mixin: String },

    /// A non-type value was passed where a type was expected.
    #[error("expected a type, found {0}")]
    NotAType(&'static str),

    /// A descriptor or object was mutated while already borrowed, e.g. by a
    /// constructor that includes mixins into its own type.
    #[error("{0} is already being modified")]
    Busy(String),

    /// A registry already holds a type with this name.
    #[error("duplicate type name '{0}'")]
    DuplicateName(Name),

    /// A value accessor was used on a value of another kind.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Resource limits exceeded (e.g. inheritance depth).
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(String),

    /// Error raised by a native method.
    #[error("{0}")]
    Method(String),
}

impl Error {
    /// Error for native methods to report their own failures.
    pub fn method(message: impl Into<String>) -> Self {
        Error::Method(message.into())
    }
}
