use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Subscription error: {0}")]
    Subscription(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for error_common::CareDeskError {
    fn from(err: StoreError) -> Self {
        error_common::CareDeskError::StoreError(err.to_string())
    }
}
