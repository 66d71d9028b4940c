//! Error classes emitted by the parameter layer.
//!
//! Every failure is raised immediately at the resolve boundary. There are no
//! retries and no implicit recovery: a type mismatch is never downgraded to
//! "not found".

use core::fmt;

use crate::value::TypeTag;

/// Result alias used throughout the crate.
pub type ParamResult<T> = core::result::Result<T, ParamError>;

/// Failures surfaced while resolving, assigning or finalizing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A binding matched the requested name but stores a different type.
    TypeMismatch {
        /// Name that was queried.
        name: String,
        /// Type stored by the binding or published by the accessor.
        stored: TypeTag,
        /// Type the caller asked for.
        requested: TypeTag,
    },
    /// A required parameter was absent from the source catalog.
    MissingRequiredParameter {
        /// Type (or component) that required the parameter.
        owner: String,
        /// Name of the missing key.
        name: String,
    },
    /// A binding created with `throw_if_unused` was never queried by name.
    UnusedParameter {
        /// Name of the unconsumed binding.
        name: String,
    },
}

impl ParamError {
    pub(crate) fn type_mismatch(name: &str, stored: TypeTag, requested: TypeTag) -> Self {
        ParamError::TypeMismatch {
            name: name.to_owned(),
            stored,
            requested,
        }
    }

    pub(crate) fn missing(owner: &str, name: &str) -> Self {
        ParamError::MissingRequiredParameter {
            owner: owner.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Returns the parameter name the error refers to.
    pub fn name(&self) -> &str {
        match self {
            ParamError::TypeMismatch { name, .. }
            | ParamError::MissingRequiredParameter { name, .. }
            | ParamError::UnusedParameter { name } => name,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::TypeMismatch {
                name,
                stored,
                requested,
            } => write!(
                f,
                "type mismatch for '{name}', stored '{stored}', trying to retrieve '{requested}'"
            ),
            ParamError::MissingRequiredParameter { owner, name } => {
                write!(f, "{owner}: missing required parameter '{name}'")
            }
            ParamError::UnusedParameter { name } => write!(f, "parameter \"{name}\" not used"),
        }
    }
}

impl std::error::Error for ParamError {}
