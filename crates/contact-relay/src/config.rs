//! Relay configuration from the environment

use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8888";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    Missing(&'static str),

    #[error("SMTP_PORT must be a port number, got `{value}`")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("RELAY_ADDR must be a socket address, got `{value}`")]
    InvalidAddress {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// SMTP connection and authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// Implicit TLS when true, STARTTLS otherwise
    pub secure: bool,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub smtp: SmtpSettings,
    /// Every submission is delivered here
    pub destination: String,
    /// Expose transport errors in 500 responses
    pub development: bool,
    pub listen: SocketAddr,
}

impl RelayConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port: u16 = match get("SMTP_PORT") {
            Some(value) => match value.trim().parse() {
                Ok(port) => port,
                Err(source) => return Err(ConfigError::InvalidPort { value, source }),
            },
            None => DEFAULT_SMTP_PORT,
        };

        let listen_value = get("RELAY_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen: SocketAddr = match listen_value.parse() {
            Ok(addr) => addr,
            Err(source) => {
                return Err(ConfigError::InvalidAddress {
                    value: listen_value,
                    source,
                })
            }
        };

        Ok(Self {
            smtp: SmtpSettings {
                host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned()),
                port,
                secure: get("SMTP_SECURE").as_deref() == Some("true"),
                username: require("EMAIL_USER")?,
                password: require("EMAIL_PASS")?,
            },
            destination: require("CONTACT_TO")?,
            development: get("RELAY_ENV").as_deref() == Some("development"),
            listen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("EMAIL_USER", "site@example.com"),
        ("EMAIL_PASS", "hunter2"),
        ("CONTACT_TO", "me@example.com"),
    ];

    #[test]
    fn test_defaults() {
        let config = RelayConfig::from_lookup(lookup(REQUIRED)).unwrap();
        assert_eq!(config.smtp.host, "smtp.gmail.com");
        assert_eq!(config.smtp.port, 587);
        assert!(!config.smtp.secure);
        assert!(!config.development);
        assert_eq!(config.listen, "127.0.0.1:8888".parse().unwrap());
    }

    #[test]
    fn test_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("SMTP_HOST", "mail.example.com"),
            ("SMTP_PORT", "465"),
            ("SMTP_SECURE", "true"),
            ("RELAY_ENV", "development"),
            ("RELAY_ADDR", "0.0.0.0:3000"),
        ]);
        let config = RelayConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.smtp.host, "mail.example.com");
        assert_eq!(config.smtp.port, 465);
        assert!(config.smtp.secure);
        assert!(config.development);
        assert_eq!(config.listen.port(), 3000);
    }

    #[test]
    fn test_secure_flag_is_exact() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SMTP_SECURE", "TRUE"));
        assert!(!RelayConfig::from_lookup(lookup(&pairs)).unwrap().smtp.secure);
    }

    #[test]
    fn test_missing_credentials() {
        let err = RelayConfig::from_lookup(lookup(&REQUIRED[1..])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("EMAIL_USER")));

        let mut pairs = REQUIRED.to_vec();
        pairs[2] = ("CONTACT_TO", "");
        let err = RelayConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CONTACT_TO")));
    }

    #[test]
    fn test_bad_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("SMTP_PORT", "smtp"));
        let err = RelayConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_password_is_not_logged() {
        let config = RelayConfig::from_lookup(lookup(REQUIRED)).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
    }
}
