//! Application state for the HR portal API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::PortalService;

/// Shared application state.
///
/// Wraps the portal service so every handler works against the same store,
/// notifier and write lock.
#[derive(Clone)]
pub struct AppState {
    service: Arc<PortalService>,
}

impl AppState {
    /// Creates a new application state around `service`.
    pub fn new(service: PortalService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the portal service.
    pub fn service(&self) -> &PortalService {
        &self.service
    }
}
