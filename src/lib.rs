//! Core library entry point for `rpp-algparams`.
//!
//! The crate lets callers hand an algorithm an arbitrary bag of named,
//! typed parameters without widening the algorithm's interface:
//!
//! * [`make_parameters`] and [`ParameterNode::with`] assemble a chain of
//!   bindings that the receiver sees as a plain [`Catalog`].
//! * [`CatalogExt`] provides the typed lookups (`get`, `get_or`,
//!   `get_required`). A name that matches with the wrong type is always a
//!   [`ParamError::TypeMismatch`], never a silent miss.
//! * [`AccessorTable`] lets a type publish its own fields as a catalog and
//!   [`AssignTable`] populates a type from any catalog.
//! * [`CombinedCatalog`] layers two catalogs.
//!
//! Everything is synchronous and single-threaded. Chains carry a non-atomic
//! `used` flag and are meant to live for one call.

pub mod bytes;
pub mod catalog;
pub mod chain;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod names;
pub mod value;

pub use bytes::{ByteArrayParameter, ConstByteArrayParameter};
pub use catalog::{Catalog, CatalogExt, CombinedCatalog, EmptyCatalog, ValueNameListing};
pub use chain::{make_parameters, make_parameters_with, ParameterChain, ParameterNode};
pub use errors::{ParamError, ParamResult};
pub use helpers::{AccessorTable, AssignTable};
pub use value::{IntoValue, Opaque, ParamValue, Slot, TypeKey, TypeTag, Value};

#[cfg(feature = "integer")]
pub use num_bigint::BigInt;
