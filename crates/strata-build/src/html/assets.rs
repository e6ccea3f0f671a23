//! Manifest and asset-list context consumed by HTML templating.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Manifest entry for one chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkAssets {
    /// Entry file for the chunk.
    pub entry: String,

    /// Content hash.
    pub hash: String,

    /// Total size in bytes.
    pub size: u64,

    /// Stylesheet files emitted with the chunk.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,
}

/// Mutable manifest/asset-list context for one HTML document.
///
/// The generator seeds this with the parent build's own entries before the
/// `before-asset-injection` point runs; the aggregator only ever adds to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlAssets {
    /// Chunk name -> manifest entry.
    pub chunks: IndexMap<String, ChunkAssets>,

    /// Script asset filenames available to templating.
    pub scripts: Vec<String>,
}
