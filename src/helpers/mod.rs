//! Per-type declarative tables.
//!
//! [`AccessorTable`] lets a type publish its fields through
//! [`Catalog`](crate::catalog::Catalog); [`AssignTable`] pulls required
//! named values out of any catalog and writes them onto an object. Both are
//! built once per type and referenced on every call.
//!
//! Neither table relies on inheritance. A type that extends another embeds
//! it and registers a base hook (`with_base`) that is consulted only when the
//! local table misses (accessors) or before the local entries run (assign).

mod access;
mod assign;

pub use access::{AccessorTable, BaseCatalog};
pub use assign::{AssignTable, BaseAssign};
