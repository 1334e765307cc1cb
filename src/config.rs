//! Configuration management for the price cache.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the price cache.
#[derive(Debug, Clone)]
pub struct Config {
    /// Price API base URL
    pub price_api_url: String,

    /// Price API key for authentication
    pub price_api_key: String,

    /// Maximum age of a cached price in seconds (default: 30)
    pub max_age_secs: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PRICE_API_BASE_URL`: Base URL for the price API
    /// - `PRICE_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `PRICE_CACHE_MAX_AGE_SECS`: Freshness window in seconds (default: 30)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let price_api_url = env::var("PRICE_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("PRICE_API_BASE_URL".to_string()))?;

        let price_api_key = env::var("PRICE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("PRICE_API_KEY".to_string()))?;

        // Validate API URL format
        if !price_api_url.starts_with("http://") && !price_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "PRICE_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // Validate API key is not empty
        if price_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PRICE_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_age_secs = Self::parse_env_u64("PRICE_CACHE_MAX_AGE_SECS", 30)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        // A zero freshness window would make every lookup a miss.
        if max_age_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PRICE_CACHE_MAX_AGE_SECS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            price_api_url,
            price_api_key,
            max_age_secs,
            request_timeout,
            log_level,
        })
    }

    /// The freshness window as a `Duration`.
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            price_api_url: String::new(),
            price_api_key: String::new(),
            max_age_secs: 30,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_age_secs, 30);
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.max_age(), Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("PRICE_API_BASE_URL", "not-a-url");
        guard.set("PRICE_API_KEY", "test-key");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "PRICE_API_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_api_key() {
        let mut guard = EnvGuard::new();
        guard.set("PRICE_API_BASE_URL", "https://prices.example.com");
        guard.set("PRICE_API_KEY", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "PRICE_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("PRICE_API_BASE_URL", "https://prices.example.com");
        guard.set("PRICE_API_KEY", "test-key-123");
        guard.set("PRICE_CACHE_MAX_AGE_SECS", "60");
        guard.set("REQUEST_TIMEOUT", "5");

        let result = Config::from_env();
        assert!(
            result.is_ok(),
            "Config should be valid with all required fields set: {:?}",
            result.err()
        );

        let config = result.unwrap();
        assert_eq!(config.price_api_url, "https://prices.example.com");
        assert_eq!(config.price_api_key, "test-key-123");
        assert_eq!(config.max_age_secs, 60);
        assert_eq!(config.request_timeout, 5);
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_max_age() {
        let mut guard = EnvGuard::new();
        guard.set("PRICE_API_BASE_URL", "https://prices.example.com");
        guard.set("PRICE_API_KEY", "test-key");
        guard.set("PRICE_CACHE_MAX_AGE_SECS", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "PRICE_CACHE_MAX_AGE_SECS");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        let result = Config::parse_env_u64("TEST_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        let result = Config::parse_env_u64("TEST_U64_INVALID", 10);
        assert!(result.is_err());
    }
}
