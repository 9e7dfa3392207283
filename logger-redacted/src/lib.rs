//! Patient-data-redacting logging for CareDesk Engine
//!
//! Hospital console log lines routinely carry patient-identifying text:
//! names on payment receipts, phone numbers from admission forms,
//! admission numbers on discharge summaries. This crate initializes the
//! tracing subscriber for the engine and provides a redactor that strips
//! that text from log messages before they are written.
//!
//! # Key Features
//!
//! - **Pattern-based Redaction**: Phone numbers, email addresses, and
//!   admission numbers are matched with configurable regex patterns
//! - **Name Masking**: Patient names are masked to their initials
//! - **Hash-based Correlation**: Redacted values can optionally be
//!   replaced with short hashes so related log lines stay correlatable
//! - **Custom Patterns**: Organization-specific patterns can be added
//!   at configuration time
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init, redact_name, LoggerConfig};
//!
//! fn main() -> error_common::Result<()> {
//!     init(&LoggerConfig::default())?;
//!
//!     tracing::info!(patient = %redact_name("Asha Rao"), "payment recorded");
//!     // patient = "A*** R***"
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod redactor;

pub use config::*;
pub use redactor::*;

use error_common::CareDeskError;

/// Initialize the tracing subscriber for the engine.
///
/// The filter string follows the `tracing_subscriber::EnvFilter` syntax;
/// the `RUST_LOG` environment variable overrides it when set.
pub fn init(config: &LoggerConfig) -> error_common::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.filter))
        .map_err(|e| CareDeskError::ConfigError(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.show_targets)
        .try_init()
        .map_err(|e| CareDeskError::ConfigError(e.to_string()))?;

    Ok(())
}
