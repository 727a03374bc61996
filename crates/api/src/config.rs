//! Environment-driven configuration with insecure-dev defaults.

use std::path::PathBuf;

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    /// Secret for signing session tokens.
    pub session_secret: String,
    pub admin_user: String,
    pub admin_pass: String,
    /// Optional JSON file to seed the menu from at startup.
    pub menu_file: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set; using insecure dev default");
            "change-me-32-characters-min-secret!!!!".to_string()
        });
        let admin_user = std::env::var("ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
        let admin_pass = std::env::var("ADMIN_PASS").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_PASS not set; using insecure dev default");
            "admin1234".to_string()
        });
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let menu_file = std::env::var("MENU_FILE").ok().map(PathBuf::from);

        Self {
            bind_addr,
            session_secret,
            admin_user,
            admin_pass,
            menu_file,
        }
    }
}
