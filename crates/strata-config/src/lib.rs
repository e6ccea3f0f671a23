pub mod config;
pub mod derive;
pub mod error;
pub mod plugin;
pub mod rule;
pub mod target;
pub mod validation;

// Re-export main types
pub use config::{BuildConfig, ModuleConfig, OutputConfig};
pub use derive::{IsolatedConfig, derive};
pub use error::{ConfigError, PluginFactoryError, Result};
pub use plugin::{BuildPlugin, ChunkGroupPlugin, PluginCapability, SharedPlugin};
pub use rule::{Loader, ModuleRule, find_transform_rule, find_transform_rule_mut};
pub use target::{BuildTarget, PluginFactory, TransformOptions};
pub use validation::{validate_setup, validate_targets};
