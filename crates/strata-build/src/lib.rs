//! # strata-build
//!
//! Multi-target build orchestration: compile one source tree into several
//! differently-transformed variants in one build pass, and let the generated
//! HTML entry point load the right variant per browser without any runtime
//! feature detection.
//!
//! The bundling engine and the HTML document generator are collaborators
//! behind the [`BuildEngine`] trait and the [`HtmlExtensions`] registry; this
//! crate owns configuration derivation, concurrent child execution, asset
//! aggregation and script tag classification.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use serde_json::json;
//! use strata_build::{
//!     BuildArtifacts, BuildConfig, BuildContext, BuildEngine, BuildTarget, EngineError,
//!     IsolatedConfig, Loader, ModuleRule, MultiTargetBuild,
//! };
//!
//! struct Engine;
//!
//! #[async_trait::async_trait]
//! impl BuildEngine for Engine {
//!     async fn execute(&self, _config: IsolatedConfig) -> Result<BuildArtifacts, EngineError> {
//!         // resolution, transformation and bundling live here
//!         Ok(BuildArtifacts::default())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = BuildConfig::new()
//!     .entry("main", "./src/main.js")
//!     .rule(ModuleRule::new(Loader::Transform));
//!
//! let build = MultiTargetBuild::new(
//!     base,
//!     vec![
//!         BuildTarget::new("modern", json!({ "esmodules": true })),
//!         BuildTarget::new("legacy", json!({ "browsers": "ie 11" })).fallback(true),
//!     ],
//! )?;
//!
//! let mut ctx = BuildContext::parent();
//! build.run(Arc::new(Engine), &mut ctx).await?;
//!
//! // hand these to the HTML document generator
//! let extensions = build.html_extensions(&ctx);
//! # Ok(()) }
//! ```

pub mod aggregator;
pub mod classifier;
pub mod context;
pub mod engine;
pub mod html;
pub mod orchestrator;

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, init_logging_from_env};

// Re-export the configuration surface for library users
pub use strata_config::{
    BuildConfig, BuildPlugin, BuildTarget, ChunkGroupPlugin, ConfigError, IsolatedConfig, Loader,
    ModuleConfig, ModuleRule, OutputConfig, PluginCapability, PluginFactoryError, SharedPlugin,
    TransformOptions,
};

pub use aggregator::AssetAggregator;
pub use classifier::ScriptTagClassifier;
pub use context::{BuildContext, BuildRole, CHILD_BUILD_PREFIX, ChildBuild};
pub use engine::{
    BuildArtifacts, BuildEngine, EngineError, OutputChunk, is_script_file, is_stylesheet_file,
};
pub use html::{
    AttrValue, ChunkAssets, HtmlAssets, HtmlExtension, HtmlExtensions, HtmlStage, MODULE_TYPE,
    NOMODULE_ATTR, ScriptTag,
};
pub use orchestrator::MultiTargetBuild;

/// Error types for strata-build operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid setup, rejected before any build is scheduled.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A child build's pipeline failed. The engine's error is carried
    /// unmodified on the source chain.
    #[error("child build `{target}` failed: {source}")]
    ChildBuild {
        target: String,
        #[source]
        source: EngineError,
    },

    /// An HTML lifecycle extension failed.
    #[error("html extension `{extension}` failed at {stage}: {source}")]
    HtmlExtension {
        extension: String,
        stage: HtmlStage,
        #[source]
        source: EngineError,
    },
}

/// Result type alias for strata-build operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Config(_) => "INVALID_CONFIG",
            Error::ChildBuild { .. } => "CHILD_BUILD_FAILED",
            Error::HtmlExtension { .. } => "HTML_EXTENSION_FAILED",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::Config(source) => Some(Box::new(format!(
                "Check the target list and base configuration.\nError: {}",
                source
            ))),
            Error::ChildBuild { target, .. } => Some(Box::new(format!(
                "The `{}` child pipeline reported this failure; the orchestrator surfaces it unchanged.",
                target
            ))),
            Error::HtmlExtension { .. } => None,
        }
    }
}
