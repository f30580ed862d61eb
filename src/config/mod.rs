//! Configuration module for the HR console.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::ConfigError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (optional in development)
    pub api_psk: Option<String>,
    /// Base URL of the REST document store
    pub store_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Placement admin login email
    pub admin_email: String,
    /// Placement admin login password
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_psk = lookup("HR_CONSOLE_API_PSK").filter(|psk| !psk.is_empty());

        let store_url = lookup("HR_CONSOLE_STORE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = lookup("HR_CONSOLE_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "HR_CONSOLE_BIND_ADDR",
                reason: e.to_string(),
            })?;

        let log_level = lookup("HR_CONSOLE_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let admin_email = lookup("HR_CONSOLE_ADMIN_EMAIL")
            .unwrap_or_else(|| "admin@placement.local".to_string());
        let admin_password =
            lookup("HR_CONSOLE_ADMIN_PASSWORD").unwrap_or_else(|| "admin123".to_string());

        Ok(Self {
            api_psk,
            store_url,
            bind_addr,
            log_level,
            admin_email,
            admin_password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert!(config.api_psk.is_none());
        assert_eq!(config.store_url, "http://localhost:3000");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.admin_email, "admin@placement.local");
        assert_eq!(config.admin_password, "admin123");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HR_CONSOLE_API_PSK", "secret"),
            ("HR_CONSOLE_STORE_URL", "http://store:5000/"),
            ("HR_CONSOLE_BIND_ADDR", "0.0.0.0:9000"),
            ("HR_CONSOLE_ADMIN_EMAIL", "tpo@college.edu"),
        ]))
        .unwrap();

        assert_eq!(config.api_psk.as_deref(), Some("secret"));
        assert_eq!(config.store_url, "http://store:5000");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.admin_email, "tpo@college.edu");
    }

    #[test]
    fn test_empty_psk_disables_auth() {
        let config = Config::from_lookup(lookup_from(&[("HR_CONSOLE_API_PSK", "")])).unwrap();
        assert!(config.api_psk.is_none());
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = Config::from_lookup(lookup_from(&[("HR_CONSOLE_BIND_ADDR", "nowhere")]))
            .unwrap_err();
        assert!(err.to_string().contains("HR_CONSOLE_BIND_ADDR"));
    }
}
