//! Infrastructure layer with external service adapters.

/// FlavorForge backend client.
pub mod api;
/// Application configuration.
pub mod config;
/// Built-in sample data.
pub mod fixtures;
/// Desktop notifications.
pub mod notifications;

pub use api::FlavorForgeClient;
pub use config::{AppConfig, CliArgs, ConfigError, DataSource, LogLevel, StorageManager};
pub use fixtures::MockDataSource;
pub use notifications::DesktopNotificationService;
