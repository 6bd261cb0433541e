use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::warn;

use crate::error::Result;
use crate::models::StaffSession;
use crate::store::KeyValueStore;

const SESSION_KEY: &str = "flower_lighting_staff_session";

pub const DEFAULT_STAFF_EMAIL: &str = "staff@flowerlighting.com";
pub const DEFAULT_STAFF_PASSWORD: &str = "admin123";

/// The single staff credential pair, supplied by configuration.
#[derive(Debug, Clone)]
pub struct StaffCredentials {
    pub email: String,
    pub password: String,
}

impl Default for StaffCredentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_STAFF_EMAIL.to_owned(),
            password: DEFAULT_STAFF_PASSWORD.to_owned(),
        }
    }
}

/// Validates the configured credential pair and keeps the session marker in
/// the store. Presence of the marker is the whole logged-in signal; there is
/// no expiry and no token validation.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    credentials: StaffCredentials,
}

impl SessionManager {
    pub fn new(store: Arc<dyn KeyValueStore>, credentials: StaffCredentials) -> Self {
        Self { store, credentials }
    }

    /// Succeeds only for the configured pair; never errors. Login without a
    /// storage context still succeeds, the marker is just not persisted.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if email != self.credentials.email || password != self.credentials.password {
            return false;
        }

        if self.store.is_available() {
            let session = StaffSession {
                email: email.to_owned(),
                logged_in_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            };
            match serde_json::to_string(&session) {
                Ok(raw) => {
                    if let Err(err) = self.store.set(SESSION_KEY, &raw) {
                        warn!(%err, "failed to persist staff session");
                    }
                }
                Err(err) => warn!(%err, "failed to serialize staff session"),
            }
        }

        true
    }

    /// Removes the session marker unconditionally.
    pub fn logout(&self) {
        if let Err(err) = self.store.remove(SESSION_KEY) {
            warn!(%err, "failed to clear staff session");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        if !self.store.is_available() {
            return false;
        }
        matches!(self.store.get(SESSION_KEY), Ok(Some(_)))
    }

    pub fn session(&self) -> Result<Option<StaffSession>> {
        if !self.store.is_available() {
            return Ok(None);
        }

        match self.store.get(SESSION_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
