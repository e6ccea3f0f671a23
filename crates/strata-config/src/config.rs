//! Base build configuration.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::plugin::SharedPlugin;
use crate::rule::ModuleRule;

/// Module rule set for a build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleConfig {
    pub rules: Vec<ModuleRule>,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
        }
    }
}

/// Base build configuration shared across targets.
///
/// Deriving a per-target configuration clones this; the original is never
/// mutated and can be reused across targets and across repeated runs. The
/// plugin list holds immutably shared handles, so a clone owns every mutable
/// structure (entries, rules, output) itself.
#[derive(Clone, Default)]
pub struct BuildConfig {
    /// Entry name -> import specifier, in declaration order.
    pub entries: IndexMap<String, String>,

    pub module: ModuleConfig,

    pub output: OutputConfig,

    /// Plugins attached to the build.
    pub plugins: Vec<SharedPlugin>,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named entry point.
    pub fn entry(mut self, name: impl Into<String>, import: impl Into<String>) -> Self {
        self.entries.insert(name.into(), import.into());
        self
    }

    /// Append a module rule.
    pub fn rule(mut self, rule: ModuleRule) -> Self {
        self.module.rules.push(rule);
        self
    }

    /// Attach a plugin.
    pub fn plugin(mut self, plugin: SharedPlugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.dir = dir.into();
        self
    }
}

impl fmt::Debug for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildConfig")
            .field("entries", &self.entries)
            .field("module", &self.module)
            .field("output", &self.output)
            .field(
                "plugins",
                &self.plugins.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
