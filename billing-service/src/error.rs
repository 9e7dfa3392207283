use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Record store error: {0}")]
    Store(#[from] record_store::StoreError),

    #[error("Layout error: {0}")]
    Layout(#[from] layout_engine::LayoutError),
}

pub type BillingResult<T> = Result<T, BillingError>;

impl From<BillingError> for error_common::CareDeskError {
    fn from(err: BillingError) -> Self {
        use error_common::CareDeskError;
        match err {
            BillingError::Validation(message) => CareDeskError::ValidationError(message),
            BillingError::Lifecycle(message) => CareDeskError::LifecycleError(message),
            BillingError::Store(store) => store.into(),
            BillingError::Layout(layout) => layout.into(),
            other => CareDeskError::BusinessError(other.to_string()),
        }
    }
}
