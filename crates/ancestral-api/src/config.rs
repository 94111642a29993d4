//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

/// Listening address and timer cadence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// How often the background driver fires due deferred effects.
    pub timer_tick: Duration,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `TIMER_TICK_MS`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `TIMER_TICK_MS` is not a
    /// valid number.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `TIMER_TICK_MS` is not a
    /// valid number, or the tick is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = lookup("PORT")
            .map_or(Ok(3000), |raw| raw.parse::<u16>())
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let tick_ms = lookup("TIMER_TICK_MS")
            .map_or(Ok(50), |raw| raw.parse::<u64>())
            .map_err(|e| AppError::Config(format!("TIMER_TICK_MS must be a valid u64: {e}")))?;
        if tick_ms == 0 {
            return Err(AppError::Config("TIMER_TICK_MS must be positive".to_owned()));
        }

        Ok(Self {
            host,
            port,
            timer_tick: Duration::from_millis(tick_ms),
        })
    }

    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, AppError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.timer_tick, Duration::from_millis(50));
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("TIMER_TICK_MS", "20")])
            .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.timer_tick, Duration::from_millis(20));
    }

    #[test]
    fn test_bad_port_is_config_error() {
        let result = config_from(&[("PORT", "eighty")]);

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_tick_is_rejected() {
        let result = config_from(&[("TIMER_TICK_MS", "0")]);

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
