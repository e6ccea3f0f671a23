//! Cross-build asset aggregation into the parent's HTML context.

use std::borrow::Cow;
use std::sync::Arc;

use crate::context::ChildBuild;
use crate::engine::{EngineError, is_script_file, is_stylesheet_file};
use crate::html::{ChunkAssets, HtmlAssets, HtmlExtension};

/// Merges every multi-target child's emitted chunks and script assets into
/// the manifest context of the document being generated.
///
/// The merge is additive: an existing manifest entry - whether seeded by the
/// parent build or left by an earlier document's pass - is never overwritten,
/// which also makes repeated invocation within one build pass idempotent.
pub struct AssetAggregator {
    children: Arc<[ChildBuild]>,
}

impl AssetAggregator {
    pub fn new(children: Arc<[ChildBuild]>) -> Self {
        Self { children }
    }
}

impl HtmlExtension for AssetAggregator {
    fn name(&self) -> Cow<'static, str> {
        "asset-aggregator".into()
    }

    fn before_asset_injection(
        &self,
        assets: &mut HtmlAssets,
    ) -> std::result::Result<(), EngineError> {
        for child in self.children.iter().filter(|child| child.is_multi_target()) {
            for chunk in &child.artifacts().chunks {
                let Some(entry) = chunk.files.iter().find(|file| is_script_file(file)) else {
                    continue;
                };

                if !assets.chunks.contains_key(&chunk.name) {
                    assets.chunks.insert(
                        chunk.name.clone(),
                        ChunkAssets {
                            entry: entry.clone(),
                            hash: chunk.hash.clone(),
                            size: chunk.size,
                            css: chunk
                                .files
                                .iter()
                                .filter(|file| is_stylesheet_file(file))
                                .cloned()
                                .collect(),
                        },
                    );
                }
            }

            for asset in child.artifacts().script_assets() {
                if !assets.scripts.iter().any(|existing| existing == asset) {
                    assets.scripts.push(asset.to_string());
                }
            }

            tracing::debug!(child = child.name(), "merged child assets into html context");
        }

        Ok(())
    }
}
