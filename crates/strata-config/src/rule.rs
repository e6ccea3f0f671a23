//! Module rules and transform-rule lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loader applied by a module rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    /// The module-transform loader. Per-target transform options are bound
    /// into the first rule (depth-first) carrying it.
    Transform,
    Css,
    Asset,
}

/// A module rule. Rules may nest; a rule with children delegates to them the
/// way the parent rule's `test` scopes the subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// File pattern the rule applies to (engine-interpreted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<Loader>,

    /// Loader options, forwarded opaquely to the engine.
    #[serde(default)]
    pub options: Value,

    /// Nested rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ModuleRule>,
}

impl ModuleRule {
    pub fn new(loader: Loader) -> Self {
        Self {
            test: None,
            loader: Some(loader),
            options: Value::Null,
            rules: Vec::new(),
        }
    }

    /// A grouping rule with no loader of its own.
    pub fn group(rules: impl IntoIterator<Item = ModuleRule>) -> Self {
        Self {
            test: None,
            loader: None,
            options: Value::Null,
            rules: rules.into_iter().collect(),
        }
    }

    pub fn test(mut self, pattern: impl Into<String>) -> Self {
        self.test = Some(pattern.into());
        self
    }

    pub fn options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// Find the module-transform rule, searching nested rules depth-first.
pub fn find_transform_rule(rules: &[ModuleRule]) -> Option<&ModuleRule> {
    for rule in rules {
        if rule.loader == Some(Loader::Transform) {
            return Some(rule);
        }
        if let Some(found) = find_transform_rule(&rule.rules) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_transform_rule`], used to bind target options.
pub fn find_transform_rule_mut(rules: &mut [ModuleRule]) -> Option<&mut ModuleRule> {
    for rule in rules {
        if rule.loader == Some(Loader::Transform) {
            return Some(rule);
        }
        if let Some(found) = find_transform_rule_mut(&mut rule.rules) {
            return Some(found);
        }
    }
    None
}
