//! Chainable parameter bindings.
//!
//! [`make_parameters`] creates a single binding rooted at the
//! [`EmptyCatalog`](crate::catalog::EmptyCatalog); every call to
//! [`ParameterNode::with`] wraps the previous chain in a new node. Lookups
//! run head-first, so the most recently added binding shadows earlier ones
//! with the same name.
//!
//! Bindings created with `throw_if_unused` must be queried by their exact
//! name before [`ParameterNode::finish`] runs, which turns typos and
//! forgotten parameters into [`UnusedParameter`](crate::ParamError::UnusedParameter)
//! failures. `ValueNames` and `ThisPointer:` queries never count as use.
//!
//! Chains use interior mutability for the `used` flag and are therefore not
//! `Sync`; they are meant to live for the duration of a single call.

mod node;
mod scope;

pub use node::{make_parameters, make_parameters_with, ParameterNode};
pub use scope::ParameterChain;
