//! lighter - A minimal object-type construction system
//!
//! # Overview
//!
//! lighter lets a program define a *type* (a reusable prototype template),
//! derive sub-types from it through single inheritance, mix in behavior from
//! unrelated types, and apply a type's behavior onto plain data objects after
//! the fact. Common use cases include:
//!
//! - Object models for embedded scripting and rule engines
//! - Retrofitting methods onto records decoded from elsewhere
//! - Capability checks over mixed-in behavior
//!
//! # Quick Start
//!
//! ```
//! use lighter::{Behavior, Method, Type, Value};
//!
//! let dog = Type::root()
//!     .extend(
//!         Behavior::new()
//!             .with("init", Method::constructor(|this, args| {
//!                 this.set("name", args[0].clone());
//!                 Ok(())
//!             }))
//!             .with("bark", Method::new(|this, _| {
//!                 let name = this.get("name").unwrap_or_default();
//!                 Ok(Value::from(format!("{} says woof", name)))
//!             })),
//!     )
//!     .unwrap();
//!
//! let mut fido = dog.instantiate(&[Value::from("Fido")]).unwrap();
//! assert_eq!(fido.get("name"), Some(Value::from("Fido")));
//! assert_eq!(fido.call("bark", &[]).unwrap(), Value::from("Fido says woof"));
//! assert!(dog.is(&dog));
//! ```
//!
//! # Mixins
//!
//! Inclusion copies another type's behavior without making it an ancestor:
//!
//! ```
//! use lighter::{Overwrite, Type};
//!
//! let root = Type::root();
//! let boxer = root.builder().method("punch", |_, _| Ok("right jab".into())).build().unwrap();
//! let kangaroo = root.builder().build().unwrap();
//! kangaroo.include(&boxer, Overwrite::Preserve).unwrap();
//!
//! let mut joey = kangaroo.instantiate(&[]).unwrap();
//! assert_eq!(joey.call("punch", &[]).unwrap().as_str().unwrap(), "right jab");
//! assert!(kangaroo.has(&boxer));
//! assert!(!kangaroo.is(&boxer));
//! ```
//!
//! # Retrofitting
//!
//! A type's behavior can be applied to an object it never constructed, with
//! or without running its constructor:
//!
//! ```
//! use lighter::{Behavior, Object, Overwrite, Type, Value};
//!
//! let adder = Type::root()
//!     .builder()
//!     .method("add", |_, args| Ok(Value::Int(args[0].as_int()? + args[1].as_int()?)))
//!     .build()
//!     .unwrap();
//!
//! let mut calculator = Object::from_fields(Behavior::new().with("model", "TI-30"));
//! adder.apply(&mut calculator, Overwrite::Preserve).unwrap();
//! assert_eq!(calculator.call("add", &[Value::Int(1), Value::Int(2)]).unwrap(), Value::Int(3));
//! ```

// Re-export public API from lighter_core
pub use lighter_core::api::{self, Error, Options, OptionsOverride, Registry};

// Re-export commonly used types and values
pub use lighter_core::types::{self, InitArgs, Type, TypeBuilder};
pub use lighter_core::values::{
    self, Behavior, Method, Name, Object, ObjectRef, Overwrite, Value, decorate, hide,
};
