use crate::config::VALUE_NAMES;
use crate::errors::ParamResult;
use crate::value::Slot;

use super::Catalog;

/// Two borrowed catalogs queried as one, `primary` first.
///
/// `ValueNames` is forwarded to both sides so the listing covers the union.
#[derive(Clone, Copy)]
pub struct CombinedCatalog<'c> {
    primary: &'c dyn Catalog,
    secondary: &'c dyn Catalog,
}

impl<'c> CombinedCatalog<'c> {
    /// Queries `primary` before `secondary`.
    pub fn new(primary: &'c dyn Catalog, secondary: &'c dyn Catalog) -> Self {
        Self { primary, secondary }
    }
}

impl Catalog for CombinedCatalog<'_> {
    fn resolve<'s>(&'s self, name: &str, slot: &mut Slot<'s>) -> ParamResult<bool> {
        if name == VALUE_NAMES {
            let primary = self.primary.resolve(name, slot)?;
            let secondary = self.secondary.resolve(name, slot)?;
            // Found if either side listed anything, not only when both did.
            return Ok(primary || secondary);
        }
        if self.primary.resolve(name, slot)? {
            return Ok(true);
        }
        self.secondary.resolve(name, slot)
    }
}
