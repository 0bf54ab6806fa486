use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use flavorforge::domain::{FlavorDataPort, NotificationPort};
use flavorforge::infrastructure::{
    AppConfig, CliArgs, DataSource, DesktopNotificationService, FlavorForgeClient,
    MockDataSource, StorageManager,
};
use flavorforge::presentation::{App, AppOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_data_source(config: &AppConfig) -> Result<Arc<dyn FlavorDataPort>> {
    match config.data_source {
        DataSource::Remote => {
            info!(base_url = %config.api.base_url, "Using remote backend");
            let client = FlavorForgeClient::with_timeout(&config.api.base_url, config.api.timeout())?;
            Ok(Arc::new(client))
        }
        DataSource::Mock => {
            info!("Using built-in sample data");
            Ok(Arc::new(MockDataSource::new(Duration::from_millis(
                config.mock.latency_ms,
            ))))
        }
    }
}

fn create_app() -> Result<App> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(version = flavorforge::VERSION, "Starting FlavorForge");

    let data = create_data_source(&config)?;
    let desktop_notifications = config.notifications.desktop.then(|| {
        Arc::new(DesktopNotificationService::new(true)) as Arc<dyn NotificationPort>
    });

    let options = AppOptions {
        initial_screen: config.ui.initial_screen(),
        accent_color: config.theme.accent_color.clone(),
        notification_duration: config.notification_duration(),
        desktop_notifications,
        persist_created: config.api.persist_created,
    };

    Ok(App::new(data, options))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
