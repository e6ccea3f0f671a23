//! Named lifecycle extension points for HTML document generation.
//!
//! Replaces string-matched callback hooks with an explicit registration API.
//! Both points have a synchronous contract: an extension mutates the
//! in-memory context it receives and returns before generation resumes.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::engine::EngineError;
use crate::html::{HtmlAssets, ScriptTag};
use crate::{Error, Result};

/// The ordered extension points of one HTML document generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlStage {
    /// Runs before assets are injected into the template context.
    BeforeAssetInjection,
    /// Runs after script tags have been generated for the document.
    AfterTagGeneration,
}

impl fmt::Display for HtmlStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlStage::BeforeAssetInjection => write!(f, "before-asset-injection"),
            HtmlStage::AfterTagGeneration => write!(f, "after-tag-generation"),
        }
    }
}

/// A hook into the HTML generation lifecycle.
///
/// Both methods default to no-ops so an extension implements only the stages
/// it cares about.
pub trait HtmlExtension: Send + Sync {
    /// Extension name, used in diagnostics.
    fn name(&self) -> Cow<'static, str>;

    fn before_asset_injection(
        &self,
        _assets: &mut HtmlAssets,
    ) -> std::result::Result<(), EngineError> {
        Ok(())
    }

    fn after_tag_generation(
        &self,
        _tags: &mut Vec<ScriptTag>,
    ) -> std::result::Result<(), EngineError> {
        Ok(())
    }
}

/// Registry of extensions, run in registration order per stage.
///
/// The HTML document generator drives this once per document: the
/// before-asset-injection pass over its manifest context, then the
/// after-tag-generation pass over the tags it produced.
#[derive(Default)]
pub struct HtmlExtensions {
    extensions: Vec<Arc<dyn HtmlExtension>>,
}

impl HtmlExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extension: Arc<dyn HtmlExtension>) {
        self.extensions.push(extension);
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn run_before_asset_injection(&self, assets: &mut HtmlAssets) -> Result<()> {
        for extension in &self.extensions {
            extension
                .before_asset_injection(assets)
                .map_err(|source| Error::HtmlExtension {
                    extension: extension.name().into_owned(),
                    stage: HtmlStage::BeforeAssetInjection,
                    source,
                })?;
        }
        Ok(())
    }

    pub fn run_after_tag_generation(&self, tags: &mut Vec<ScriptTag>) -> Result<()> {
        for extension in &self.extensions {
            extension
                .after_tag_generation(tags)
                .map_err(|source| Error::HtmlExtension {
                    extension: extension.name().into_owned(),
                    stage: HtmlStage::AfterTagGeneration,
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        marker: &'static str,
    }

    impl HtmlExtension for Recorder {
        fn name(&self) -> Cow<'static, str> {
            self.marker.into()
        }

        fn before_asset_injection(
            &self,
            assets: &mut HtmlAssets,
        ) -> std::result::Result<(), EngineError> {
            assets.scripts.push(self.marker.to_string());
            Ok(())
        }
    }

    #[test]
    fn extensions_run_in_registration_order() {
        let mut extensions = HtmlExtensions::new();
        extensions.register(Arc::new(Recorder { marker: "first" }));
        extensions.register(Arc::new(Recorder { marker: "second" }));

        let mut assets = HtmlAssets::default();
        extensions.run_before_asset_injection(&mut assets).unwrap();

        assert_eq!(assets.scripts, ["first", "second"]);
    }

    #[test]
    fn stage_names_render_kebab_case() {
        assert_eq!(
            HtmlStage::BeforeAssetInjection.to_string(),
            "before-asset-injection"
        );
        assert_eq!(HtmlStage::AfterTagGeneration.to_string(), "after-tag-generation");
    }
}
