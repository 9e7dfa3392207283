use thiserror::Error;

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum CareDeskError {
    /// Input validation and data format errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Operations rejected by the admission lifecycle
    #[error("Lifecycle error: {0}")]
    LifecycleError(String),

    /// Record store read/write errors
    #[error("Record store error: {0}")]
    StoreError(String),

    /// Bed inventory mutation errors
    #[error("Bed inventory error: {0}")]
    BedInventoryError(String),

    /// Page layout errors
    #[error("Layout error: {0}")]
    LayoutError(String),

    /// Page rendering errors
    #[error("Render error: {0}")]
    RenderError(String),

    /// Business logic errors
    #[error("Business logic error: {0}")]
    BusinessError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Generic error with context
    #[error("Error: {message}")]
    Generic { message: String },

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for CareDesk operations
pub type Result<T> = std::result::Result<T, CareDeskError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &CareDeskError) {
    tracing::error!(
        context = context,
        error = %error,
        "CareDesk error occurred"
    );
}
