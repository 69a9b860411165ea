//! Configuration loading for the portal.
//!
//! The portal reads a single YAML file with server, storage, payroll,
//! notification and admin sections.
//!
//! # Example
//!
//! ```no_run
//! use hr_portal::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/portal.yaml").unwrap();
//! println!("Data directory: {}", config.config().storage.data_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdminConfig, DEFAULT_ADMIN_PASSWORD, NotificationConfig, PayrollConfig, PortalConfig,
    ServerConfig, StorageConfig,
};
