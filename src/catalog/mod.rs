//! The catalog protocol.
//!
//! A [`Catalog`] answers one question: "is there a binding called `name`,
//! and if so, copy it into this slot". Everything else in the crate, from
//! parameter chains to per-type accessor tables, is an implementation of
//! that single primitive plus the sugar in [`CatalogExt`].
//!
//! | Query | Result |
//! |-------|--------|
//! | ordinary name, type matches | value copied, `Ok(true)` |
//! | ordinary name, type differs | [`ParamError::TypeMismatch`](crate::ParamError::TypeMismatch) |
//! | unknown name | `Ok(false)` after every fallback was consulted |
//! | `ValueNames` | `;`-terminated listing appended to a text slot |
//! | `ThisPointer:<tag>` | reference to the queried object when `<tag>` is its type |
//! | `ThisObject:<tag>` | full copy of the queried object when `<tag>` is its type |

mod combined;
mod ext;

pub use combined::CombinedCatalog;
pub use ext::{CatalogExt, ValueNameListing};

use crate::errors::ParamResult;
use crate::value::Slot;

/// Queryable set of name to typed-value bindings with fallback.
pub trait Catalog {
    /// Resolves `name` into `slot`.
    ///
    /// Returns `Ok(true)` if the name was found and copied, `Ok(false)` if no
    /// binding (including every fallback) knows it, and an error if the name
    /// matched with a different type.
    fn resolve<'s>(&'s self, name: &str, slot: &mut Slot<'s>) -> ParamResult<bool>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn resolve<'s>(&'s self, name: &str, slot: &mut Slot<'s>) -> ParamResult<bool> {
        (**self).resolve(name, slot)
    }
}

/// Catalog without bindings. Terminates every parameter chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyCatalog;

impl Catalog for EmptyCatalog {
    fn resolve<'s>(&'s self, _name: &str, _slot: &mut Slot<'s>) -> ParamResult<bool> {
        Ok(false)
    }
}
