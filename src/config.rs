use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::repos::{StaffCredentials, DEFAULT_STAFF_EMAIL, DEFAULT_STAFF_PASSWORD};

pub struct Config {
    pub port: u16,
    /// Connection string for the blob-store pool; the pool is configured but
    /// not exercised by any current route.
    pub database_url: Option<String>,
    pub staff_email: String,
    pub staff_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "4321"),
            database_url: env::var("DATABASE_URL").ok(),
            staff_email: load_or("STAFF_EMAIL", DEFAULT_STAFF_EMAIL),
            staff_password: load_or("STAFF_PASSWORD", DEFAULT_STAFF_PASSWORD),
        }
    }

    pub fn staff_credentials(&self) -> StaffCredentials {
        StaffCredentials {
            email: self.staff_email.clone(),
            password: self.staff_password.clone(),
        }
    }
}

fn load_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default");
        default.to_owned()
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    load_or(key, default)
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
