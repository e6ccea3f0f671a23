//! Error types for configuration validation and target derivation.

use thiserror::Error;

/// Opaque error returned by a target's plugin factory.
pub type PluginFactoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Setup validation errors - raised before any build is scheduled
    #[error("no build targets specified")]
    EmptyTargets,

    #[error("build target at index {index} has an empty key")]
    MissingTargetKey { index: usize },

    #[error("duplicate build target key: {key}")]
    DuplicateTargetKey { key: String },

    #[error("no module-transform rule to bind target options into")]
    MissingTransformRule,

    // Derivation errors
    #[error("plugin factory for target `{target}` failed")]
    PluginFactory {
        target: String,
        #[source]
        source: PluginFactoryError,
    },
}
