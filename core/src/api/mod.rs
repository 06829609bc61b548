//! Public API surface: errors, configuration and the type registry.
//!
//! # Example
//!
//! ```
//! use lighter_core::api::{Options, Registry};
//! use lighter_core::values::{Behavior, Method, Value};
//!
//! let mut registry = Registry::new(Options::default());
//! let dog = registry
//!     .define(
//!         "Dog",
//!         Behavior::new()
//!             .with("init", Method::constructor(|this, args| {
//!                 this.set("name", args[0].clone());
//!                 Ok(())
//!             }))
//!             .with("legs", 4),
//!     )
//!     .unwrap();
//!
//! let fido = dog.instantiate(&[Value::from("Fido")]).unwrap();
//! assert_eq!(fido.get("name"), Some(Value::from("Fido")));
//! assert_eq!(fido.get("legs"), Some(Value::Int(4)));
//! assert!(registry.get("Dog").unwrap().is(&dog));
//! ```

pub mod error;
pub mod options;
pub mod registry;

pub use error::Error;
pub use options::{Options, OptionsOverride};
pub use registry::Registry;
