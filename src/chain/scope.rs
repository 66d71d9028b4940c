use crate::catalog::{Catalog, EmptyCatalog};
use crate::errors::{ParamError, ParamResult};

use super::node::ParameterNode;

/// Chain-level bookkeeping for the fail-fast unused-binding check.
///
/// Implemented by [`ParameterNode`] and by the [`EmptyCatalog`] root.
pub trait ParameterChain: Catalog {
    /// Name of the head-most binding that requires consumption but was never
    /// queried by its own name.
    fn first_unused(&self) -> Option<&str>;

    /// Marks every node as finalized so dropping the chain stays silent.
    fn seal(&self);
}

impl ParameterChain for EmptyCatalog {
    fn first_unused(&self) -> Option<&str> {
        None
    }

    fn seal(&self) {}
}

impl<P: ParameterChain> ParameterChain for ParameterNode<'_, P> {
    fn first_unused(&self) -> Option<&str> {
        if self.must_report() {
            return Some(self.name());
        }
        self.parent.first_unused()
    }

    fn seal(&self) {
        self.sealed.set(true);
        self.parent.seal();
    }
}

impl<'a, P: ParameterChain> ParameterNode<'a, P> {
    /// Finalizes the chain.
    ///
    /// Fails with [`ParamError::UnusedParameter`] naming the head-most binding
    /// that was created with `throw_if_unused` and never queried by its own
    /// name. `unwinding` reports that another error is already propagating;
    /// the check is then skipped so the original cause is not masked.
    pub fn finish(self, unwinding: bool) -> ParamResult<()> {
        let unused = self.first_unused().map(str::to_owned);
        self.seal();
        match unused {
            Some(name) if unwinding => {
                tracing::debug!(param = %name, "unused parameter ignored while another error propagates");
                Ok(())
            }
            Some(name) => Err(ParamError::UnusedParameter { name }),
            None => Ok(()),
        }
    }

    /// Hands the chain to `receiver` and finalizes it afterwards.
    ///
    /// An error from `receiver` takes precedence and suppresses the unused
    /// check.
    pub fn scoped<R, F>(self, receiver: F) -> ParamResult<R>
    where
        F: FnOnce(&dyn Catalog) -> ParamResult<R>,
    {
        let outcome = receiver(&self);
        let finished = self.finish(outcome.is_err());
        let value = outcome?;
        finished?;
        Ok(value)
    }
}
