use core::any::Any;

use serde::Serialize;

use crate::config::{
    this_object_key, this_pointer_key, THIS_OBJECT_PREFIX, THIS_POINTER_PREFIX, VALUE_NAMES,
    VALUE_NAME_SEPARATOR,
};
use crate::errors::{ParamError, ParamResult};
use crate::value::{Opaque, ParamValue, Slot, TypeKey, TypeTag, Value};

use super::Catalog;

/// Typed lookups layered on top of [`Catalog::resolve`].
///
/// Blanket-implemented for every catalog, including `dyn Catalog`.
pub trait CatalogExt: Catalog {
    /// Returns the value bound to `name`, or `None` if nothing is bound.
    fn get<'s, T: ParamValue<'s>>(&'s self, name: &str) -> ParamResult<Option<T>> {
        let mut slot = Slot::for_type::<T>();
        if !self.resolve(name, &mut slot)? {
            return Ok(None);
        }
        Ok(slot.extract())
    }

    /// Returns the value bound to `name`, or `default` if nothing is bound.
    fn get_or<'s, T: ParamValue<'s>>(&'s self, name: &str, default: T) -> ParamResult<T> {
        Ok(self.get(name)?.unwrap_or(default))
    }

    /// Returns the value bound to `name`, failing with
    /// [`ParamError::MissingRequiredParameter`] attributed to `owner` if
    /// nothing is bound.
    fn get_required<'s, T: ParamValue<'s>>(&'s self, owner: &str, name: &str) -> ParamResult<T> {
        self.get(name)?
            .ok_or_else(|| ParamError::missing(owner, name))
    }

    /// Returns a reference to the object behind this catalog if it is a `T`.
    fn this_pointer<'s, T: Any>(&'s self) -> ParamResult<Option<&'s T>> {
        let key = TypeKey::of::<T>();
        let mut slot = Slot::new(TypeTag::Pointer(key));
        if !self.resolve(&this_pointer_key(key.name()), &mut slot)? {
            return Ok(None);
        }
        Ok(match slot.into_value() {
            Some(Value::Pointer(_, object)) => object.downcast_ref::<T>(),
            _ => None,
        })
    }

    /// Returns a full copy of the object behind this catalog if it is a `T`
    /// and publishes itself as assignable.
    fn this_object<T: Any + Clone>(&self) -> ParamResult<Option<T>> {
        let key = TypeKey::of::<T>();
        Ok(self
            .get::<Opaque<T>>(&this_object_key(key.name()))?
            .map(Opaque::into_inner))
    }

    /// Returns the raw `;`-terminated `ValueNames` listing.
    ///
    /// Diagnostic only: the query never marks a binding as used.
    fn value_names(&self) -> String {
        let mut slot = Slot::value_names();
        if let Err(err) = self.resolve(VALUE_NAMES, &mut slot) {
            tracing::debug!(%err, "value name listing incomplete");
        }
        slot.extract::<String>().unwrap_or_default()
    }

    /// Returns the `ValueNames` listing split by entry kind.
    fn value_name_listing(&self) -> ValueNameListing {
        ValueNameListing::parse(&self.value_names())
    }
}

impl<C: Catalog + ?Sized> CatalogExt for C {}

/// Structured form of a `ValueNames` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueNameListing {
    /// Ordinary binding and accessor names, in listing order.
    pub names: Vec<String>,
    /// Type tags announced through `ThisPointer:` markers, one per level.
    pub this_pointers: Vec<String>,
    /// Type tags announced through `ThisObject:` markers.
    pub this_objects: Vec<String>,
}

impl ValueNameListing {
    /// Splits a raw listing into its entries.
    pub fn parse(raw: &str) -> Self {
        let mut listing = Self::default();
        for entry in raw
            .split(VALUE_NAME_SEPARATOR)
            .filter(|entry| !entry.is_empty())
        {
            if let Some(tag) = entry.strip_prefix(THIS_POINTER_PREFIX) {
                listing.this_pointers.push(tag.to_owned());
            } else if let Some(tag) = entry.strip_prefix(THIS_OBJECT_PREFIX) {
                listing.this_objects.push(tag.to_owned());
            } else {
                listing.names.push(entry.to_owned());
            }
        }
        listing
    }

    /// Returns `true` if `name` is listed as an ordinary name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|listed| listed == name)
    }
}
