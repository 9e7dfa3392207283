use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page format: {0}")]
    InvalidPageFormat(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

impl From<LayoutError> for error_common::CareDeskError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Render(message) => error_common::CareDeskError::RenderError(message),
            LayoutError::Config(message) => error_common::CareDeskError::ConfigError(message),
            other => error_common::CareDeskError::LayoutError(other.to_string()),
        }
    }
}
