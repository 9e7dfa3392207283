/// Main logging configuration structure
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Default filter directive when RUST_LOG is unset
    pub filter: String,
    /// Include event targets in output
    pub show_targets: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            show_targets: true,
        }
    }
}
