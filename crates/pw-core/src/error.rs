use pw_events::store::DuplicateIdError;
use pw_events::types::{ActivityId, IdError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("activity id already exists: {id}")]
    DuplicateId { id: ActivityId },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl From<DuplicateIdError> for ActivityError {
    fn from(value: DuplicateIdError) -> Self {
        Self::DuplicateId { id: value.id }
    }
}

impl From<IdError> for ActivityError {
    fn from(value: IdError) -> Self {
        Self::InvalidInput {
            message: value.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PaywatchError {
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error("import failed: {message}")]
    Import { message: String },
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<DuplicateIdError> for PaywatchError {
    fn from(value: DuplicateIdError) -> Self {
        PaywatchError::Activity(ActivityError::from(value))
    }
}

impl From<IdError> for PaywatchError {
    fn from(value: IdError) -> Self {
        PaywatchError::Activity(ActivityError::from(value))
    }
}
