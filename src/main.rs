//! HR portal server.
//!
//! Usage: `hr-portal [CONFIG_PATH]`. The configuration path falls back to
//! `$HR_PORTAL_CONFIG`, then `./config/portal.yaml`.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hr_portal::api::{AppState, create_router};
use hr_portal::config::{ConfigLoader, PortalConfig};
use hr_portal::notify::{LogNotifier, Notifier, WebhookNotifier};
use hr_portal::service::{PortalService, ServiceOptions};
use hr_portal::storage::{FileStore, PortalStore};

const CONFIG_ENV: &str = "HR_PORTAL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/portal.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = config_path();
    info!(path = %config_path.display(), "Loading configuration");
    let config = ConfigLoader::load(&config_path)?.into_config();

    let service = open_service(&config)?;
    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    info!(addr = %config.server.bind, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn open_service(config: &PortalConfig) -> Result<PortalService, Box<dyn std::error::Error>> {
    let backend = FileStore::open(&config.storage.data_dir)?;
    info!(dir = %backend.dir().display(), "Using file store");

    let notifier: Arc<dyn Notifier> = match config.notifications.webhook_url() {
        Some(url) => Arc::new(WebhookNotifier::new(url)?),
        None => {
            warn!("No webhook configured, notifications will only be logged");
            Arc::new(LogNotifier)
        }
    };

    let service = PortalService::open(
        PortalStore::new(Arc::new(backend)),
        notifier,
        ServiceOptions::from(config),
    )?;
    Ok(service)
}
