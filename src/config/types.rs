//! Configuration types for the portal.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field is optional; anything left out takes its default.

use std::net::SocketAddr;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DEFAULT_HOURLY_RATE;

/// The admin password used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The complete portal configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Where collections are persisted.
    pub storage: StorageConfig,
    /// Wage calculation settings.
    pub payroll: PayrollConfig,
    /// Outbound notification settings.
    pub notifications: NotificationConfig,
    /// Admin login settings.
    pub admin: AdminConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The socket address to listen on.
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per collection.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// Wage calculation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Wage paid per recorded hour.
    pub hourly_rate: Decimal,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

/// Outbound notification settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Webhook receiving `{"content": ...}` posts. Notifications are only
    /// logged when unset.
    pub webhook_url: Option<String>,
}

impl NotificationConfig {
    /// The webhook URL, ignoring a blank value.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Admin login settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// The shared admin password.
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}
