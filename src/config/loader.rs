//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the portal
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{PortalError, PortalResult};

use super::types::PortalConfig;

/// Loads and provides access to the portal configuration.
///
/// # Example
///
/// ```no_run
/// use hr_portal::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/portal.yaml").unwrap();
/// println!("Listening on {}", loader.config().server.bind);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PortalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - A field has the wrong type (e.g. a malformed bind address)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_portal::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/portal.yaml")?;
    /// # Ok::<(), hr_portal::error::PortalError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PortalResult<Self> {
        let config = Self::load_yaml::<PortalConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Parses configuration from YAML text. `source` names the text in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> PortalResult<Self> {
        let config = Self::parse_yaml::<PortalConfig>(content, source)?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PortalConfig {
        self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PortalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PortalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, source: &str) -> PortalResult<T> {
        // An empty document means "all defaults".
        let content = if content.trim().is_empty() { "{}" } else { content };

        serde_yaml::from_str(content).map_err(|e| PortalError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }
}
