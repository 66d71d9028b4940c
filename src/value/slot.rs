use crate::config::VALUE_NAME_SEPARATOR;
use crate::errors::{ParamError, ParamResult};

use super::convert::ParamValue;
use super::types::{TypeTag, Value};

/// Output slot handed to [`Catalog::resolve`](crate::catalog::Catalog::resolve).
///
/// The slot records the type the caller asked for and receives a copy of the
/// matched value. Every write goes through [`Slot::fill`], so a name that
/// matches with the wrong type is reported as
/// [`ParamError::TypeMismatch`] instead of being skipped.
#[derive(Debug)]
pub struct Slot<'s> {
    requested: TypeTag,
    value: Option<Value<'s>>,
}

impl<'s> Slot<'s> {
    /// Creates an empty slot requesting `requested`.
    pub fn new(requested: TypeTag) -> Self {
        Self {
            requested,
            value: None,
        }
    }

    /// Creates an empty slot requesting the tag of `T`.
    pub fn for_type<T: ParamValue<'s>>() -> Self {
        Self::new(T::type_tag())
    }

    /// Creates the text slot used by `ValueNames` queries.
    pub fn value_names() -> Self {
        Self {
            requested: TypeTag::Text,
            value: Some(Value::Text(String::new())),
        }
    }

    /// Returns the requested type.
    pub fn requested(&self) -> TypeTag {
        self.requested
    }

    /// Fails with a type mismatch unless `stored` is exactly the requested type.
    pub fn check_type(&self, name: &str, stored: TypeTag) -> ParamResult<()> {
        if stored != self.requested {
            tracing::trace!(param = name, %stored, requested = %self.requested, "type mismatch");
            return Err(ParamError::type_mismatch(name, stored, self.requested));
        }
        Ok(())
    }

    /// Copies `value` into the slot after an exact type check.
    pub fn fill(&mut self, name: &str, value: Value<'s>) -> ParamResult<()> {
        self.check_type(name, value.type_tag())?;
        self.value = Some(value);
        Ok(())
    }

    /// Same as [`Slot::fill`] but lets a stored `Int` satisfy an `Integer`
    /// request.
    pub(crate) fn fill_widening(&mut self, name: &str, value: Value<'s>) -> ParamResult<()> {
        let value = value.widen_to(self.requested);
        self.fill(name, value)
    }

    /// Appends one `ValueNames` entry followed by the separator.
    pub fn append_name(&mut self, entry: &str) {
        match &mut self.value {
            Some(Value::Text(listing)) => {
                listing.push_str(entry);
                listing.push(VALUE_NAME_SEPARATOR);
            }
            _ => {
                let mut listing = String::with_capacity(entry.len() + 1);
                listing.push_str(entry);
                listing.push(VALUE_NAME_SEPARATOR);
                self.value = Some(Value::Text(listing));
            }
        }
    }

    /// Returns `true` once a value has been copied in.
    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Consumes the slot and returns the raw value, if any.
    pub fn into_value(self) -> Option<Value<'s>> {
        self.value
    }

    /// Consumes the slot and converts the value into `T`.
    pub fn extract<T: ParamValue<'s>>(self) -> Option<T> {
        self.value.and_then(T::from_value)
    }
}
