//! Build target descriptors.

use std::fmt;
use std::sync::Arc;

use crate::error::PluginFactoryError;
use crate::plugin::SharedPlugin;

/// Opaque per-target transform configuration, forwarded to the engine's
/// module-transform loader as-is.
pub type TransformOptions = serde_json::Value;

/// Produces a target-specific plugin list, replacing the base configuration's
/// plugins for that target. A factory error is a fatal setup error.
pub type PluginFactory =
    Arc<dyn Fn() -> std::result::Result<Vec<SharedPlugin>, PluginFactoryError> + Send + Sync>;

/// A named build variant sharing source with its siblings but differing in
/// transform/compatibility settings.
#[derive(Clone)]
pub struct BuildTarget {
    /// Unique, non-empty identifier. Namespaces entry and chunk names.
    pub key: String,

    /// Transform options bound into the derived configuration.
    pub transform: TransformOptions,

    /// Optional replacement plugin list for this target.
    pub plugins: Option<PluginFactory>,

    /// Designates the legacy/fallback target. Script tags referencing this
    /// target's assets are marked for non-module browsers.
    pub fallback: bool,
}

impl BuildTarget {
    pub fn new(key: impl Into<String>, transform: TransformOptions) -> Self {
        Self {
            key: key.into(),
            transform,
            plugins: None,
            fallback: false,
        }
    }

    /// Supply a target-specific plugin list.
    pub fn plugins<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> std::result::Result<Vec<SharedPlugin>, PluginFactoryError>
            + Send
            + Sync
            + 'static,
    {
        self.plugins = Some(Arc::new(factory));
        self
    }

    pub fn fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }
}

impl fmt::Debug for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildTarget")
            .field("key", &self.key)
            .field("transform", &self.transform)
            .field("plugins", &self.plugins.as_ref().map(|_| "<factory>"))
            .field("fallback", &self.fallback)
            .finish()
    }
}
