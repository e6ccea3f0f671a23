//! Build engine collaborator seam.
//!
//! The engine owns module resolution, transformation and bundling. The
//! orchestrator only constructs builds from isolated configurations, runs
//! them, and observes success or failure asynchronously.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strata_config::IsolatedConfig;

/// Opaque error surfaced by the build engine collaborator.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A named grouping of bundled output files emitted by one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputChunk {
    /// Chunk name. Child builds emit names already carrying the
    /// `{target}/` prefix from their namespaced entries.
    pub name: String,

    /// Filenames emitted for this chunk.
    pub files: Vec<String>,

    /// Content hash.
    pub hash: String,

    /// Total size in bytes.
    pub size: u64,
}

/// Chunks and asset filenames produced by one build pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildArtifacts {
    pub chunks: Vec<OutputChunk>,

    /// Every emitted filename, chunk files included.
    pub assets: Vec<String>,
}

impl BuildArtifacts {
    pub fn contains_asset(&self, file: &str) -> bool {
        self.assets.iter().any(|asset| asset == file)
    }

    /// Script-bearing asset filenames.
    pub fn script_assets(&self) -> impl Iterator<Item = &str> {
        self.assets
            .iter()
            .map(String::as_str)
            .filter(|file| is_script_file(file))
    }
}

/// An opaque build pipeline producing chunks and assets from an isolated
/// configuration.
#[async_trait]
pub trait BuildEngine: Send + Sync {
    async fn execute(&self, config: IsolatedConfig) -> Result<BuildArtifacts, EngineError>;
}

pub fn is_script_file(file: &str) -> bool {
    file.ends_with(".js") || file.ends_with(".mjs")
}

pub fn is_stylesheet_file(file: &str) -> bool {
    file.ends_with(".css")
}
