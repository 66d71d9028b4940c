//! Typed values exchanged through catalogs.
//!
//! A binding stores one [`Value`] whose [`TypeTag`] is fixed at construction.
//! Callers request a value by tag through a [`Slot`]; the stored tag must
//! match the requested one exactly. The single exception is that a bound
//! `i32` may be read back as an arbitrary-precision integer when the
//! `integer` feature is enabled.

mod convert;
mod slot;
mod types;

pub use convert::{IntoValue, Opaque, ParamValue};
pub use slot::Slot;
pub use types::{TypeKey, TypeTag, Value};
