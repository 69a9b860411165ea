//! Admin login and sessions.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};

use super::PortalService;

/// Proof of a successful admin login.
///
/// Only [`PortalService::login`] and [`PortalService::authorize`] create
/// sessions. A session stops working once the admin logs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    token: String,
}

impl AdminSession {
    /// The bearer token identifying this session.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl PortalService {
    /// Logs the admin in.
    ///
    /// A login while a session is already stored joins that session, so
    /// several admin clients can be signed in at once.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidPassword`] if `password` does not match
    /// the configured secret. Nothing is stored in that case.
    pub fn login(&self, password: &str) -> PortalResult<AdminSession> {
        if password != self.options.admin_password {
            warn!("Admin login rejected");
            return Err(PortalError::InvalidPassword);
        }

        let _guard = self.lock();
        let token = match self.store.admin_token()? {
            Some(token) => token,
            None => {
                let token = Uuid::new_v4().to_string();
                self.store.set_admin_token(&token)?;
                token
            }
        };
        info!("Admin logged in");
        Ok(AdminSession { token })
    }

    /// Rebuilds the session identified by a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::AdminLoginRequired`] unless `token` is the
    /// stored session token.
    pub fn authorize(&self, token: &str) -> PortalResult<AdminSession> {
        match self.store.admin_token()? {
            Some(stored) if !token.is_empty() && stored == token => Ok(AdminSession {
                token: stored,
            }),
            _ => Err(PortalError::AdminLoginRequired),
        }
    }

    /// Ends the admin session, invalidating every copy of it.
    pub fn logout(&self, session: &AdminSession) -> PortalResult<()> {
        self.require(session)?;
        let _guard = self.lock();
        self.store.clear_admin_token()?;
        info!("Admin logged out");
        Ok(())
    }

    /// Checks that `session` is still the stored session.
    pub(super) fn require(&self, session: &AdminSession) -> PortalResult<()> {
        self.authorize(&session.token).map(|_| ())
    }
}
