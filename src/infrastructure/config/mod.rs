//! Application configuration.

/// Config file schema and CLI merging.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config file location and persistence.
pub mod storage;

pub use app_config::{
    ApiConfig, AppConfig, DataSource, LogLevel, MockConfig, NotificationsConfig, ThemeConfig,
    UiConfig,
};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
