//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Match weights must be non-negative and sum to 1.0")]
    InvalidWeights,

    #[error("Selection limit must be at least 1")]
    InvalidSelectionLimit,

    #[error("Current-role preference must be within [0.0, 1.0]")]
    InvalidRolePreference,

    #[error("Invalid augmentation base URL")]
    InvalidBaseUrl,
}
