use core::any::{type_name, Any};

use crate::catalog::Catalog;
use crate::config::{
    this_object_key, this_pointer_key, THIS_OBJECT_PREFIX, THIS_POINTER_PREFIX, VALUE_NAMES,
};
use crate::errors::ParamResult;
use crate::value::{IntoValue, ParamValue, Slot, TypeTag, Value};

type Getter<T> = Box<dyn Fn(&T) -> Value<'static> + Send + Sync>;

/// Resolver of the base-equivalent part of an object.
pub type BaseCatalog<T> = fn(&T) -> &dyn Catalog;

struct Accessor<T> {
    name: &'static str,
    tag: TypeTag,
    get: Getter<T>,
}

/// Declarative table publishing the fields of `T` as named, typed values.
///
/// Build the table once per type, typically in a `once_cell::sync::Lazy`
/// static, and call [`AccessorTable::resolve`] from the type's
/// [`Catalog::resolve`] implementation:
///
/// ```ignore
/// static ACCESSORS: Lazy<AccessorTable<RsaPublicKey>> = Lazy::new(|| {
///     AccessorTable::new()
///         .assignable()
///         .named(names::MODULUS, |key: &RsaPublicKey| key.modulus.clone())
///         .named(names::PUBLIC_EXPONENT, |key: &RsaPublicKey| key.exponent.clone())
/// });
///
/// impl Catalog for RsaPublicKey {
///     fn resolve<'s>(&'s self, name: &str, slot: &mut Slot<'s>) -> ParamResult<bool> {
///         ACCESSORS.resolve(self, name, slot, None)
///     }
/// }
/// ```
pub struct AccessorTable<T: 'static> {
    entries: Vec<Accessor<T>>,
    copy: Option<fn(&T) -> Value<'static>>,
    base: Option<BaseCatalog<T>>,
}

impl<T: Any> AccessorTable<T> {
    /// Creates a table with no entries, no base and no whole-object copy.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            copy: None,
            base: None,
        }
    }

    /// Publishes `name`, computed by `accessor`.
    ///
    /// Entries are matched in declaration order; the first exact name wins.
    pub fn named<R, F>(mut self, name: &'static str, accessor: F) -> Self
    where
        R: ParamValue<'static>,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.entries.push(Accessor {
            name,
            tag: R::type_tag(),
            get: Box::new(move |object: &T| IntoValue::into_value(accessor(object))),
        });
        self
    }

    /// Publishes `ThisObject:<tag>`, letting assign tables copy the whole
    /// object in one step.
    pub fn assignable(mut self) -> Self
    where
        T: Clone,
    {
        self.copy = Some(copy_object::<T>);
        self
    }

    /// Consults `base` on a local miss, after the search-first catalog.
    pub fn with_base(mut self, base: BaseCatalog<T>) -> Self {
        self.base = Some(base);
        self
    }

    /// Type tag used in this table's reflection keys.
    pub fn type_tag(&self) -> &'static str {
        type_name::<T>()
    }

    /// Declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Resolves `name` against `object`.
    ///
    /// Dispatch order: `ValueNames`, `ThisPointer:<tag>`, `search_first`,
    /// base, `ThisObject:<tag>` and finally the declared entries. A declared
    /// name that matches with a different type is a type mismatch, not a miss.
    pub fn resolve<'s>(
        &self,
        object: &'s T,
        name: &str,
        slot: &mut Slot<'s>,
        search_first: Option<&'s dyn Catalog>,
    ) -> ParamResult<bool> {
        let tag = self.type_tag();

        if name == VALUE_NAMES {
            slot.check_type(name, TypeTag::Text)?;
            if let Some(first) = search_first {
                first.resolve(name, slot)?;
            }
            if let Some(base) = self.base {
                base(object).resolve(name, slot)?;
            }
            slot.append_name(&this_pointer_key(tag));
            if self.copy.is_some() {
                slot.append_name(&this_object_key(tag));
            }
            for entry in &self.entries {
                slot.append_name(entry.name);
            }
            return Ok(true);
        }

        if name.strip_prefix(THIS_POINTER_PREFIX) == Some(tag) {
            slot.fill(name, Value::pointer(object))?;
            return Ok(true);
        }

        if let Some(first) = search_first {
            if first.resolve(name, slot)? {
                return Ok(true);
            }
        }

        if let Some(base) = self.base {
            if base(object).resolve(name, slot)? {
                return Ok(true);
            }
        }

        if let Some(copy) = self.copy {
            if name.strip_prefix(THIS_OBJECT_PREFIX) == Some(tag) {
                slot.fill(name, copy(object))?;
                return Ok(true);
            }
        }

        match self.entries.iter().find(|entry| entry.name == name) {
            Some(entry) => {
                slot.check_type(name, entry.tag)?;
                slot.fill(name, (entry.get)(object))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<T: Any> Default for AccessorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_object<T: Any + Clone>(object: &T) -> Value<'static> {
    Value::custom(object.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogExt;
    use crate::errors::ParamError;
    use crate::make_parameters_with;
    use once_cell::sync::Lazy;

    #[derive(Debug, Clone, PartialEq)]
    struct Window {
        width: u32,
        label: String,
    }

    static WINDOW: Lazy<AccessorTable<Window>> = Lazy::new(|| {
        AccessorTable::new()
            .assignable()
            .named("Width", |window: &Window| window.width)
            .named("Label", |window: &Window| window.label.clone())
            .named("Width", |_: &Window| 0u32)
    });

    impl Catalog for Window {
        fn resolve<'s>(&'s self, name: &str, slot: &mut Slot<'s>) -> ParamResult<bool> {
            WINDOW.resolve(self, name, slot, None)
        }
    }

    fn window() -> Window {
        Window {
            width: 640,
            label: "main".into(),
        }
    }

    #[test]
    fn first_declared_entry_wins() {
        assert_eq!(window().get::<u32>("Width").unwrap(), Some(640));
        assert_eq!(window().get::<u32>("Height").unwrap(), None);
    }

    #[test]
    fn declared_name_with_wrong_type_is_fatal() {
        let err = window().get::<i32>("Width").unwrap_err();
        assert!(matches!(err, ParamError::TypeMismatch { stored: TypeTag::UInt, .. }));
    }

    #[test]
    fn reflection_keys_resolve_self() {
        let window = window();
        let this = window.this_pointer::<Window>().unwrap().unwrap();
        assert!(core::ptr::eq(this, &window));
        assert_eq!(window.this_object::<Window>().unwrap(), Some(window.clone()));
        assert_eq!(window.this_pointer::<String>().unwrap(), None);
    }

    #[test]
    fn search_first_overrides_fields() {
        let window = window();
        let overrides = make_parameters_with("Width", 800u32, false);
        let mut slot = Slot::for_type::<u32>();
        assert!(WINDOW
            .resolve(&window, "Width", &mut slot, Some(&overrides as &dyn Catalog))
            .unwrap());
        assert_eq!(slot.extract::<u32>(), Some(800));
    }
}
