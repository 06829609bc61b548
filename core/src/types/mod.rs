//! Type descriptors and the algorithms over them.
//!
//! A [`Type`] holds a pre-flattened instance behavior map (its own keys plus
//! every inherited key, copied forward at extension time), a static behavior
//! map, a constructor, an immutable parent link and an append-only list of
//! mixins. Because behavior is flattened, member lookup never walks the
//! ancestry; only [`Type::is`], [`Type::has`] and constructor delegation do.
//!
//! # Example
//!
//! ```
//! use lighter_core::types::Type;
//! use lighter_core::values::{Behavior, Method, Value};
//!
//! let root = Type::root();
//! let vehicle = root
//!     .extend(Behavior::new().with(
//!         "worksOnLand",
//!         Method::new(|this, _| Ok(Value::Bool(this.get("isLandVehicle").is_some_and(|v| v.is_truthy())))),
//!     ))
//!     .unwrap();
//! let car = vehicle.extend(Behavior::new().with("isLandVehicle", true)).unwrap();
//! let hovercraft = vehicle.extend(Behavior::new()).unwrap();
//! hovercraft.include(&car, Default::default()).unwrap();
//!
//! let mut craft = hovercraft.instantiate(&[]).unwrap();
//! assert_eq!(craft.call("worksOnLand", &[]).unwrap(), Value::Bool(true));
//! assert!(hovercraft.has(&car));
//! assert!(!hovercraft.is(&car));
//! ```

pub mod apply;
pub mod builder;
pub mod descriptor;
pub mod query;

pub use apply::InitArgs;
pub use builder::TypeBuilder;
pub use descriptor::{Type, TypeId};
pub use query::Ancestors;
