use super::app_config::{DataSource, LogLevel};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "flavorforge",
    version,
    about = "A terminal dashboard for food-product ideation",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Backend base URL.
    #[arg(long, value_name = "URL", env = "FLAVORFORGE_API_URL")]
    pub api_url: Option<String>,

    /// Data source (remote backend or built-in sample data).
    #[arg(long, value_enum)]
    pub data_source: Option<DataSource>,

    /// Initial screen identifier.
    #[arg(long, value_name = "ID")]
    pub screen: Option<String>,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Mirror notifications to the desktop.
    #[arg(long)]
    pub desktop_notifications: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
