//! Application configuration

use clap::Args;

pub mod catalog;
pub mod logging;

pub use catalog::CatalogConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Settings shared by every command.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Catalog file locations.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
