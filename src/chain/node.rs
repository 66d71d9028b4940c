use std::cell::Cell;

use crate::catalog::{Catalog, EmptyCatalog};
use crate::config::{is_reserved_name, DEFAULT_THROW_IF_UNUSED, VALUE_NAMES};
use crate::errors::ParamResult;
use crate::value::{IntoValue, Slot, TypeTag, Value};

/// One binding in a parameter chain.
///
/// The node owns its parent, so the outermost node owns the whole chain down
/// to the [`EmptyCatalog`] root. Apart from the `used` flag, which is set the
/// first time the node is queried by its own name, a node is immutable.
#[derive(Debug)]
pub struct ParameterNode<'a, P = EmptyCatalog> {
    name: &'a str,
    value: Value<'a>,
    throw_if_unused: bool,
    used: Cell<bool>,
    pub(super) sealed: Cell<bool>,
    pub(super) parent: P,
}

/// Starts a chain with a single binding that must be consumed.
///
/// ```ignore
/// let params = make_parameters("KeySize", 32u32).with("Rounds", 14).with("IV", &iv[..]);
/// cipher.initialize(&params)?;
/// params.finish(false)?;
/// ```
pub fn make_parameters<'a, V: IntoValue<'a>>(name: &'a str, value: V) -> ParameterNode<'a> {
    make_parameters_with(name, value, DEFAULT_THROW_IF_UNUSED)
}

/// Starts a chain with an explicit fail-fast flag.
pub fn make_parameters_with<'a, V: IntoValue<'a>>(
    name: &'a str,
    value: V,
    throw_if_unused: bool,
) -> ParameterNode<'a> {
    ParameterNode::chained(EmptyCatalog, name, value.into_value(), throw_if_unused)
}

impl<'a, P> ParameterNode<'a, P> {
    fn chained(parent: P, name: &'a str, value: Value<'a>, throw_if_unused: bool) -> Self {
        if is_reserved_name(name) {
            tracing::warn!(param = name, "binding uses a reserved reflection name");
        }
        Self {
            name,
            value,
            throw_if_unused,
            used: Cell::new(false),
            sealed: Cell::new(false),
            parent,
        }
    }

    /// Adds a binding on top of this chain, inheriting the fail-fast flag.
    ///
    /// The new binding shadows any earlier binding with the same name.
    pub fn with<V: IntoValue<'a>>(self, name: &'a str, value: V) -> ParameterNode<'a, Self> {
        let throw_if_unused = self.throw_if_unused;
        self.with_throw(name, value, throw_if_unused)
    }

    /// Adds a binding on top of this chain with an explicit fail-fast flag.
    pub fn with_throw<V: IntoValue<'a>>(
        self,
        name: &'a str,
        value: V,
        throw_if_unused: bool,
    ) -> ParameterNode<'a, Self> {
        ParameterNode::chained(self, name, value.into_value(), throw_if_unused)
    }

    /// Name this node binds.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Type of the bound value.
    pub fn type_tag(&self) -> TypeTag {
        self.value.type_tag()
    }

    /// Returns `true` once the binding was queried by its own name.
    pub fn is_used(&self) -> bool {
        self.used.get()
    }

    /// Returns `true` if `finish` reports this binding when unused.
    pub fn throw_if_unused(&self) -> bool {
        self.throw_if_unused
    }

    /// Chain this node shadows.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub(super) fn must_report(&self) -> bool {
        self.throw_if_unused && !self.used.get()
    }
}

impl<'a, P: Catalog> Catalog for ParameterNode<'a, P> {
    fn resolve<'s>(&'s self, name: &str, slot: &mut Slot<'s>) -> ParamResult<bool> {
        if name == VALUE_NAMES {
            slot.check_type(name, TypeTag::Text)?;
            self.parent.resolve(name, slot)?;
            slot.append_name(self.name);
            return Ok(true);
        }
        if name == self.name {
            slot.fill_widening(name, self.value.clone())?;
            self.used.set(true);
            tracing::trace!(param = name, "parameter resolved");
            return Ok(true);
        }
        self.parent.resolve(name, slot)
    }
}

impl<P> Drop for ParameterNode<'_, P> {
    fn drop(&mut self) {
        if !self.sealed.get() && self.must_report() && !std::thread::panicking() {
            tracing::warn!(
                name = self.name,
                "parameter chain dropped without finish; binding was never used"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogExt;
    use crate::errors::ParamError;

    #[test]
    fn resolves_each_binding_by_type() {
        let params = make_parameters("a", 1).with("b", "x").with("c", 3.0);
        assert_eq!(params.get::<i32>("a").unwrap(), Some(1));
        assert_eq!(params.get::<String>("b").unwrap().as_deref(), Some("x"));
        assert_eq!(params.get::<f64>("c").unwrap(), Some(3.0));
        assert_eq!(params.get::<u64>("d").unwrap(), None);
        assert!(params.is_used());
        assert!(params.parent().is_used());
        assert!(params.parent().parent().is_used());
    }

    #[test]
    fn mismatch_is_fatal_at_any_depth() {
        let params = make_parameters_with("a", 1, false)
            .with("b", 2u32)
            .with("c", true);
        let err = params.get::<f64>("a").unwrap_err();
        assert_eq!(
            err,
            ParamError::TypeMismatch {
                name: "a".into(),
                stored: TypeTag::Int,
                requested: TypeTag::Double,
            }
        );
        assert!(!params.parent().parent().is_used());
    }

    #[test]
    fn later_binding_shadows_earlier() {
        let params = make_parameters_with("a", 1, false).with("a", 2);
        assert_eq!(params.get::<i32>("a").unwrap(), Some(2));
        assert!(params.is_used());
        assert!(!params.parent().is_used());
    }

    #[test]
    fn value_names_does_not_mark_used() {
        let params = make_parameters_with("a", 1, false).with("b", 2);
        assert_eq!(params.value_names(), "a;b;");
        assert!(!params.is_used());
        assert!(!params.parent().is_used());
    }

    #[test]
    fn reserved_binding_name_never_shadows_listing() {
        let params = make_parameters_with("Rounds", 12, false).with(VALUE_NAMES, 7);
        assert_eq!(params.value_names(), "Rounds;ValueNames;");
        assert!(params.get::<i32>(VALUE_NAMES).is_err());
        assert!(!params.is_used());
    }

    #[test]
    fn with_inherits_flag_unless_overridden() {
        let params = make_parameters_with("a", 1, false)
            .with("b", 2)
            .with_throw("c", 3, true);
        assert!(params.throw_if_unused());
        assert!(!params.parent().throw_if_unused());
        assert!(!params.parent().parent().throw_if_unused());
        let _ = params.get::<i32>("c");
    }

    #[cfg(feature = "integer")]
    #[test]
    fn int_widens_to_integer() {
        use num_bigint::BigInt;

        let params = make_parameters("PublicExponent", 65537);
        let exponent: BigInt = params.get("PublicExponent").unwrap().unwrap();
        assert_eq!(exponent, BigInt::from(65537));

        let params = make_parameters_with("PublicExponent", 65537u32, false);
        assert!(params.get::<BigInt>("PublicExponent").is_err());
    }
}
