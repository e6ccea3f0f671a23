//! Script tag classification for differentiated delivery.

use std::borrow::Cow;

use rustc_hash::FxHashSet;

use crate::context::ChildBuild;
use crate::engine::EngineError;
use crate::html::{HtmlExtension, MODULE_TYPE, NOMODULE_ATTR, ScriptTag};

/// Tags every generated script tag as legacy-fallback or module-capable.
///
/// A tag referencing an asset emitted by a fallback-designated target gets
/// the `nomodule` flag; every other tag - fallback-unrelated child output and
/// parent output alike - gets `type="module"`. The browser's native handling
/// of the two attributes performs the branch; no detection script is emitted.
pub struct ScriptTagClassifier {
    fallback_assets: FxHashSet<String>,
}

impl ScriptTagClassifier {
    pub fn new(children: &[ChildBuild], fallback_keys: &[String]) -> Self {
        let fallback_assets = children
            .iter()
            .filter(|child| {
                child
                    .target_key()
                    .is_some_and(|key| fallback_keys.iter().any(|fallback| fallback == key))
            })
            .flat_map(|child| child.artifacts().assets.iter().cloned())
            .collect();

        Self { fallback_assets }
    }
}

impl HtmlExtension for ScriptTagClassifier {
    fn name(&self) -> Cow<'static, str> {
        "script-tag-classifier".into()
    }

    fn after_tag_generation(
        &self,
        tags: &mut Vec<ScriptTag>,
    ) -> std::result::Result<(), EngineError> {
        for tag in tags.iter_mut() {
            if self.fallback_assets.contains(tag.src()) {
                tag.set_flag(NOMODULE_ATTR);
            } else {
                tag.set_attribute("type", MODULE_TYPE);
            }
        }
        Ok(())
    }
}
