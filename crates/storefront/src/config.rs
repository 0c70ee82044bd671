//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LOOMWEAR_DATA_DIR` - Directory holding the persistent state slot
//!   (default: `.loomwear`)
//! - `LOOMWEAR_STATE_SLOT` - Name of the state slot (default:
//!   `shop_state`)
//! - `LOOMWEAR_BASE_URL` - Public base URL used for the checkout
//!   redirect (default: `https://shop.loomwear.test`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Directory holding the persistent state slot
    pub data_dir: PathBuf,
    /// Name of the state slot (file stem under `data_dir`)
    pub state_slot: String,
    /// Public base URL for checkout redirects
    pub base_url: String,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LOOMWEAR_DATA_DIR", ".loomwear"));

        let state_slot = get_env_or_default("LOOMWEAR_STATE_SLOT", "shop_state");
        if state_slot.is_empty() || state_slot.contains(['/', '\\']) {
            return Err(ConfigError::InvalidEnvVar(
                "LOOMWEAR_STATE_SLOT".to_owned(),
                "must be a non-empty file name without path separators".to_owned(),
            ));
        }

        let base_url = get_env_or_default("LOOMWEAR_BASE_URL", "https://shop.loomwear.test");
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "LOOMWEAR_BASE_URL".to_owned(),
                "must start with http:// or https://".to_owned(),
            ));
        }

        Ok(Self {
            data_dir,
            state_slot,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("LOOMWEAR_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
