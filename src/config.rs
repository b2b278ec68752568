//! Cart service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORE_BUFFER_SIZE` - Request channel capacity of each store (default: 32)
//! - `CART_LOG_FILTER` - Log filter used when `RUST_LOG` is unset (default: info)

use thiserror::Error;

const DEFAULT_BUFFER_SIZE: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime configuration of a [`CartSystem`](crate::lifecycle::CartSystem).
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Capacity of each store's request channel
    pub store_buffer_size: usize,
    /// Default `tracing` filter directive
    pub log_filter: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            store_buffer_size: DEFAULT_BUFFER_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store_buffer_size = parse_buffer_size(
            "CART_STORE_BUFFER_SIZE",
            &get_env_or_default("CART_STORE_BUFFER_SIZE", &DEFAULT_BUFFER_SIZE.to_string()),
        )?;
        let log_filter = get_env_or_default("CART_LOG_FILTER", DEFAULT_LOG_FILTER);

        Ok(Self {
            store_buffer_size,
            log_filter,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_buffer_size(key: &str, raw: &str) -> Result<usize, ConfigError> {
    let size = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if size == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.store_buffer_size, 32);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_parse_buffer_size() {
        assert_eq!(parse_buffer_size("K", " 64 ").unwrap(), 64);
        assert!(matches!(
            parse_buffer_size("K", "0"),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "K"
        ));
        assert!(parse_buffer_size("K", "lots").is_err());
    }
}
