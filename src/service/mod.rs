//! The portal controller.
//!
//! [`PortalService`] implements every user action of the portal, employee
//! self-service and admin alike, on top of the [`PortalStore`]. Admin
//! actions take an [`AdminSession`] obtained from [`PortalService::login`].
//!
//! Actions that modify a collection hold a process-wide write lock for the
//! whole read-modify-write, and send their notification only after the lock
//! is released.

mod attendance;
mod employees;
mod leave;
mod reports;
mod session;

use std::sync::{Arc, Mutex, MutexGuard};

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::DEFAULT_HOURLY_RATE;
use crate::config::{DEFAULT_ADMIN_PASSWORD, PortalConfig};
use crate::error::PortalResult;
use crate::notify::Notifier;
use crate::storage::PortalStore;

pub use session::AdminSession;

/// Tunable settings for a [`PortalService`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOptions {
    /// Wage per recorded hour.
    pub hourly_rate: Decimal,
    /// The shared admin secret.
    pub admin_password: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl From<&PortalConfig> for ServiceOptions {
    fn from(config: &PortalConfig) -> Self {
        Self {
            hourly_rate: config.payroll.hourly_rate,
            admin_password: config.admin.password.clone(),
        }
    }
}

/// Implements the portal's user actions.
pub struct PortalService {
    store: PortalStore,
    notifier: Arc<dyn Notifier>,
    options: ServiceOptions,
    write_lock: Mutex<()>,
}

impl PortalService {
    /// Opens the service over `store`.
    ///
    /// Both collections are read once so that a corrupt store is reported
    /// here rather than on the first user action.
    ///
    /// # Errors
    ///
    /// Returns a storage error if either collection cannot be read or parsed.
    pub fn open(
        store: PortalStore,
        notifier: Arc<dyn Notifier>,
        options: ServiceOptions,
    ) -> PortalResult<Self> {
        let employees = store.get_employees()?.len();
        let leave_requests = store.get_leave_requests()?.len();
        info!(employees, leave_requests, "Opened portal store");

        Ok(Self {
            store,
            notifier,
            options,
            write_lock: Mutex::new(()),
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &PortalStore {
        &self.store
    }

    /// The hourly rate used for wages.
    pub fn hourly_rate(&self) -> Decimal {
        self.options.hourly_rate
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }
}

impl std::fmt::Debug for PortalService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalService")
            .field("hourly_rate", &self.options.hourly_rate)
            .finish_non_exhaustive()
    }
}
