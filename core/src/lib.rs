//! Core of the lighter object-type construction system.
//!
//! A [`Type`](types::Type) is a reusable prototype template. Types are derived
//! from one another through single inheritance, can mix in the behavior of
//! unrelated types, and can retrofit their behavior onto plain
//! [`Object`](values::Object)s that were never constructed through them.
//!
//! The crate is organized in three layers:
//!
//! - [`values`]: dynamic values, native methods, behavior maps and objects.
//! - [`types`]: type descriptors and the extension, application, inclusion
//!   and ancestry algorithms.
//! - [`api`]: the public error type, configuration and the [`Registry`](api::Registry).

pub mod api;
pub mod types;
pub mod values;
