use thiserror::Error;

use crate::TypeKey;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {key:?}, context: {context}")]
    StateNotFound { key: TypeKey, context: String },
    #[error("Compute not found: {key:?}, context: {context}")]
    ComputeNotFound { key: TypeKey, context: String },
    #[error("Command not found: {key:?}, context: {context}")]
    CommandNotFound { key: TypeKey, context: String },
}

impl Error {
    pub fn state_not_found(key: TypeKey, context: impl Into<String>) -> Self {
        Self::StateNotFound {
            key,
            context: context.into(),
        }
    }

    pub fn compute_not_found(key: TypeKey, context: impl Into<String>) -> Self {
        Self::ComputeNotFound {
            key,
            context: context.into(),
        }
    }

    pub fn command_not_found(key: TypeKey, context: impl Into<String>) -> Self {
        Self::CommandNotFound {
            key,
            context: context.into(),
        }
    }
}
