use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
static DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: SocketAddr,
    pub session_expiry_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let session_expiry_days = match lookup("SESSION_EXPIRY_DAYS") {
            Some(value) => match value.parse::<i64>() {
                Ok(days) if days > 0 => days,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_EXPIRY_DAYS".to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_EXPIRY_DAYS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_SESSION_EXPIRY_DAYS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr,
            session_expiry_days,
        })
    }
}
