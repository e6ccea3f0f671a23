//! Plugin descriptors with explicit capability markers.
//!
//! Special plugins are recognized by the capability they report, never by
//! inspecting type or constructor names. Hosts with several HTML-generation
//! mechanisms mark each of them; the derivation layer stays name-agnostic.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Shared, immutable plugin handle carried by build configurations.
pub type SharedPlugin = Arc<dyn BuildPlugin>;

/// Capability consulted when deriving per-target configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginCapability {
    /// No special handling during derivation.
    Generic,
    /// Generates HTML documents. Removed from derived configs so child
    /// builds never re-trigger HTML generation; only the parent build does.
    HtmlGeneration,
    /// Groups output into named chunks. Chunk names are rewritten per target
    /// to keep merged output collision-free.
    ChunkGrouping,
    /// The multi-target orchestrator itself. Removed from derived configs.
    MultiTarget,
}

/// A plugin instance attached to a build configuration.
///
/// Plugins are immutable once constructed; derivation never mutates one in
/// place, it builds replacements via [`BuildPlugin::with_chunk_names`].
pub trait BuildPlugin: Send + Sync {
    /// Plugin name, used in logs and diagnostics only.
    fn name(&self) -> Cow<'static, str>;

    /// Capability marker consulted by the derivation layer.
    fn capability(&self) -> PluginCapability {
        PluginCapability::Generic
    }

    /// Chunk names this plugin groups output under.
    ///
    /// Only meaningful for [`PluginCapability::ChunkGrouping`] plugins.
    fn chunk_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Rebuild this plugin with rewritten chunk names.
    ///
    /// Chunk-grouping plugins return a fresh instance; everything else keeps
    /// the default `None` and is carried over unchanged.
    fn with_chunk_names(&self, _names: Vec<String>) -> Option<SharedPlugin> {
        None
    }
}

impl fmt::Debug for dyn BuildPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildPlugin")
            .field("name", &self.name())
            .field("capability", &self.capability())
            .finish()
    }
}

/// Groups bundled output into the named chunks it is configured with.
///
/// The engine collaborator interprets the grouping; from the orchestrator's
/// side this is the plugin whose names get the `{target}/` prefix during
/// derivation.
#[derive(Debug, Clone)]
pub struct ChunkGroupPlugin {
    names: Vec<String>,
}

impl ChunkGroupPlugin {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl BuildPlugin for ChunkGroupPlugin {
    fn name(&self) -> Cow<'static, str> {
        "chunk-group".into()
    }

    fn capability(&self) -> PluginCapability {
        PluginCapability::ChunkGrouping
    }

    fn chunk_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn with_chunk_names(&self, names: Vec<String>) -> Option<SharedPlugin> {
        Some(Arc::new(Self { names }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_group_plugin_rebuilds_with_new_names() {
        let plugin = ChunkGroupPlugin::new(["vendor", "runtime"]);
        let rebuilt = plugin
            .with_chunk_names(vec!["legacy/vendor".to_string(), "legacy/runtime".to_string()])
            .expect("chunk-group plugins rebuild");

        assert_eq!(
            rebuilt.chunk_names(),
            vec!["legacy/vendor".to_string(), "legacy/runtime".to_string()]
        );
        // the original instance is untouched
        assert_eq!(plugin.names(), ["vendor", "runtime"]);
    }

    #[test]
    fn generic_plugins_have_no_chunk_names() {
        struct Noop;
        impl BuildPlugin for Noop {
            fn name(&self) -> Cow<'static, str> {
                "noop".into()
            }
        }

        let plugin = Noop;
        assert_eq!(plugin.capability(), PluginCapability::Generic);
        assert!(plugin.chunk_names().is_empty());
        assert!(plugin.with_chunk_names(vec!["x".to_string()]).is_none());
    }
}
