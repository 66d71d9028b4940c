use core::any::{type_name, Any};

use crate::catalog::{Catalog, CatalogExt};
use crate::errors::ParamResult;
use crate::value::ParamValue;

type Setter<T> = Box<dyn Fn(&mut T, &dyn Catalog, &str) -> ParamResult<()> + Send + Sync>;

/// Assigns the base-equivalent part of an object.
pub type BaseAssign<T> = fn(&mut T, &dyn Catalog) -> ParamResult<()>;

struct Mutator<T> {
    names: Vec<&'static str>,
    set: Setter<T>,
}

/// Declarative table populating a `T` from any catalog.
///
/// Every declared name is required. When the source exposes
/// `ThisObject:<tag>` for `T` the whole object is copied instead and no
/// entry runs.
pub struct AssignTable<T: 'static> {
    owner: &'static str,
    entries: Vec<Mutator<T>>,
    base: Option<BaseAssign<T>>,
}

impl<T: Any + Clone> AssignTable<T> {
    /// Creates an empty table; errors name `T` as the owner.
    pub fn new() -> Self {
        Self {
            owner: type_name::<T>(),
            entries: Vec::new(),
            base: None,
        }
    }

    /// Overrides the owner reported in missing-parameter errors.
    pub fn with_owner(mut self, owner: &'static str) -> Self {
        self.owner = owner;
        self
    }

    /// Requires `name` and passes its value to `mutator`.
    pub fn named<R, F>(mut self, name: &'static str, mutator: F) -> Self
    where
        R: for<'s> ParamValue<'s>,
        F: Fn(&mut T, R) + Send + Sync + 'static,
    {
        self.entries.push(Mutator {
            names: vec![name],
            set: Box::new(move |target: &mut T, source: &dyn Catalog, owner: &str| {
                let value: R = source.get_required(owner, name)?;
                mutator(target, value);
                Ok(())
            }),
        });
        self
    }

    /// Requires both names and passes their values to `mutator` together.
    pub fn named2<R, S, F>(mut self, first: &'static str, second: &'static str, mutator: F) -> Self
    where
        R: for<'s> ParamValue<'s>,
        S: for<'s> ParamValue<'s>,
        F: Fn(&mut T, R, S) + Send + Sync + 'static,
    {
        self.entries.push(Mutator {
            names: vec![first, second],
            set: Box::new(move |target: &mut T, source: &dyn Catalog, owner: &str| {
                let value1: R = source.get_required(owner, first)?;
                let value2: S = source.get_required(owner, second)?;
                mutator(target, value1, value2);
                Ok(())
            }),
        });
        self
    }

    /// Runs `base` before this table's own entries.
    pub fn with_base(mut self, base: BaseAssign<T>) -> Self {
        self.base = Some(base);
        self
    }

    /// Owner named in missing-parameter errors.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Every required name in declaration order.
    pub fn required_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| entry.names.iter().copied())
    }

    /// Populates `target` from `source`.
    ///
    /// Fails with [`MissingRequiredParameter`](crate::ParamError::MissingRequiredParameter)
    /// on the first absent name. Entries before the failing one have already
    /// been applied.
    pub fn assign_from(&self, target: &mut T, source: &dyn Catalog) -> ParamResult<()> {
        if let Some(object) = source.this_object::<T>()? {
            tracing::debug!(owner = self.owner, "assigned whole object");
            *target = object;
            return Ok(());
        }
        if let Some(base) = self.base {
            base(target, source)?;
        }
        for entry in &self.entries {
            (entry.set)(target, source, self.owner)?;
        }
        Ok(())
    }
}

impl<T: Any + Clone> Default for AssignTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParamError;
    use crate::make_parameters;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        start: u64,
        step: u64,
        label: String,
    }

    fn table() -> AssignTable<Counter> {
        AssignTable::new()
            .with_owner("Counter")
            .named2("Start", "Step", |counter: &mut Counter, start: u64, step: u64| {
                counter.start = start;
                counter.step = step;
            })
            .named("Label", |counter: &mut Counter, label: String| {
                counter.label = label;
            })
    }

    #[test]
    fn assigns_every_declared_name() {
        let params = make_parameters("Start", 5u64)
            .with("Step", 2u64)
            .with("Label", "ticks");
        let mut counter = Counter::default();
        table().assign_from(&mut counter, &params).unwrap();
        assert_eq!(
            counter,
            Counter {
                start: 5,
                step: 2,
                label: "ticks".into()
            }
        );
        params.finish(false).unwrap();
    }

    #[test]
    fn missing_name_is_reported_with_owner() {
        let params = make_parameters("Start", 5u64).with("Label", "ticks");
        let mut counter = Counter::default();
        let err = table().assign_from(&mut counter, &params).unwrap_err();
        assert_eq!(
            err,
            ParamError::MissingRequiredParameter {
                owner: "Counter".into(),
                name: "Step".into()
            }
        );
        assert_eq!(err.to_string(), "Counter: missing required parameter 'Step'");
        assert!(params.finish(true).is_ok());
    }

    #[test]
    fn lists_required_names() {
        let names: Vec<_> = table().required_names().collect();
        assert_eq!(names, vec!["Start", "Step", "Label"]);
    }
}
