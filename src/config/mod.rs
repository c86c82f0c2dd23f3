//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `RESUME_TAILOR` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use resume_tailor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod augmentation;
mod error;
mod matching;

pub use augmentation::AugmentationConfig;
pub use error::{ConfigError, ValidationError};
pub use matching::MatchingConfig;

use serde::Deserialize;

/// Root configuration for the tailoring core
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Augmentation client configuration
    #[serde(default)]
    pub augmentation: AugmentationConfig,

    /// Scoring and selection configuration
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `RESUME_TAILOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `RESUME_TAILOR__AUGMENTATION__API_KEY=...` -> `augmentation.api_key`
    /// - `RESUME_TAILOR__MATCHING__MAX_ACCOMPLISHMENTS=6` -> `matching.max_accomplishments`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RESUME_TAILOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.augmentation.validate()?;
        self.matching.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_propagates_section_errors() {
        let config = AppConfig {
            augmentation: AugmentationConfig {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
