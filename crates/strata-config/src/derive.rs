//! Per-target isolated configuration derivation.

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::plugin::{PluginCapability, SharedPlugin};
use crate::rule::find_transform_rule_mut;
use crate::target::BuildTarget;

/// A build configuration owned exclusively by one target.
///
/// Entry and chunk names carry the `{target}/` prefix, the plugin list is
/// filtered of the orchestrator and of HTML-generation plugins, and the
/// module-transform rule carries the target's options.
#[derive(Debug, Clone)]
pub struct IsolatedConfig {
    /// Key of the owning target.
    pub target: String,

    pub config: BuildConfig,
}

/// Derive the isolated configuration for one target.
///
/// The base configuration is deep-copied first and never mutated, so the same
/// base can be reused across targets and across repeated runs.
pub fn derive(base: &BuildConfig, target: &BuildTarget) -> Result<IsolatedConfig> {
    let mut config = base.clone();

    let plugins = match &target.plugins {
        Some(factory) => factory().map_err(|source| ConfigError::PluginFactory {
            target: target.key.clone(),
            source,
        })?,
        None => config.plugins.clone(),
    };

    config.plugins = plugins
        .into_iter()
        .filter(|plugin| {
            !matches!(
                plugin.capability(),
                PluginCapability::MultiTarget | PluginCapability::HtmlGeneration
            )
        })
        .map(|plugin| namespace_chunk_names(plugin, &target.key))
        .collect();

    config.entries = config
        .entries
        .iter()
        .map(|(name, import)| (format!("{}/{}", target.key, name), import.clone()))
        .collect();

    let rule = find_transform_rule_mut(&mut config.module.rules)
        .ok_or(ConfigError::MissingTransformRule)?;
    rule.options = target.transform.clone();

    tracing::debug!(key = %target.key, entries = config.entries.len(), "derived isolated config");

    Ok(IsolatedConfig {
        target: target.key.clone(),
        config,
    })
}

/// Prefix a chunk-grouping plugin's names with the target key, leaving every
/// other plugin untouched.
fn namespace_chunk_names(plugin: SharedPlugin, key: &str) -> SharedPlugin {
    if plugin.capability() != PluginCapability::ChunkGrouping {
        return plugin;
    }

    let names = plugin
        .chunk_names()
        .iter()
        .map(|name| format!("{key}/{name}"))
        .collect();

    plugin.with_chunk_names(names).unwrap_or(plugin)
}
