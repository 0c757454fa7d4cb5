//! Error types for model queries.
//!
//! The failure surface is deliberately small. Unresolved invocation targets,
//! unknown base types, and absent members are not errors: models routinely
//! reference library types outside their own closure, so those lookups
//! degrade to empty results instead.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required exact-name lookup found no matching type. The optional
    /// lookup variant returns `None` instead of this.
    #[error("type `{name}` was not found in the model")]
    TypeNotFound { name: String },
}
