//! Multi-target build orchestration.
//!
//! One orchestrator instance derives an isolated configuration per target,
//! runs every target as an independent child of the parent build, and wires
//! the post-join HTML hooks that merge and classify the children's output.

use std::borrow::Cow;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use strata_config::{
    BuildConfig, BuildPlugin, BuildTarget, IsolatedConfig, PluginCapability, derive,
    validate_setup,
};

use crate::aggregator::AssetAggregator;
use crate::classifier::ScriptTagClassifier;
use crate::context::{BuildContext, BuildRole, ChildBuild};
use crate::engine::{BuildArtifacts, BuildEngine};
use crate::html::HtmlExtensions;
use crate::{Error, Result};

/// Orchestrates one build pass over a fixed set of targets.
///
/// Construction runs the full setup validation, so an instance in hand means
/// scheduling can no longer fail for configuration reasons.
#[derive(Debug)]
pub struct MultiTargetBuild {
    base: BuildConfig,
    targets: Vec<BuildTarget>,
    max_parallel: Option<usize>,
}

impl MultiTargetBuild {
    pub fn new(base: BuildConfig, targets: Vec<BuildTarget>) -> Result<Self> {
        validate_setup(&base, &targets)?;
        Ok(Self {
            base,
            targets,
            max_parallel: None,
        })
    }

    /// Cap concurrently running child builds. Defaults to available cores,
    /// at most 8.
    pub fn max_parallel(mut self, max: usize) -> Self {
        self.max_parallel = Some(max.max(1));
        self
    }

    pub fn targets(&self) -> &[BuildTarget] {
        &self.targets
    }

    /// Derive one isolated configuration per target, in declaration order.
    pub fn isolated_configs(&self) -> Result<Vec<IsolatedConfig>> {
        self.targets
            .iter()
            .map(|target| derive(&self.base, target).map_err(Error::from))
            .collect()
    }

    /// Run every target as a child of the parent build and register the
    /// results on `ctx`.
    ///
    /// No-op when `ctx` is already a child context: a child build never
    /// re-orchestrates. The join is all-or-nothing - the first child failure
    /// observed is surfaced once, with the engine's error unmodified on the
    /// source chain; siblings keep running to completion.
    pub async fn run(&self, engine: Arc<dyn BuildEngine>, ctx: &mut BuildContext) -> Result<()> {
        if ctx.role() == BuildRole::Child {
            tracing::debug!("already running inside a child build, skipping orchestration");
            return Ok(());
        }

        let configs = self.isolated_configs()?;
        tracing::info!(targets = configs.len(), "running multi-target child builds");

        let results = execute_children(engine, configs, self.max_parallel).await;

        // Drain every result before reporting so siblings are never torn
        // down; the first failure in completion order wins.
        let mut artifacts_by_key: FxHashMap<String, BuildArtifacts> = FxHashMap::default();
        let mut first_error: Option<Error> = None;
        for (key, result) in results {
            match result {
                Ok(artifacts) => {
                    tracing::debug!(key = %key, "child build completed");
                    artifacts_by_key.insert(key, artifacts);
                }
                Err(error) => {
                    tracing::error!(key = %key, %error, "child build failed");
                    if first_error.is_none() {
                        first_error = Some(error);
                    }
                }
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }

        // Register in declaration order for determinism regardless of
        // completion order.
        let mut children = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            match artifacts_by_key.remove(&target.key) {
                Some(artifacts) => children.push(ChildBuild::for_target(&target.key, artifacts)),
                None => {
                    return Err(Error::ChildBuild {
                        target: target.key.clone(),
                        source: "missing child build result".into(),
                    });
                }
            }
        }
        for child in children {
            ctx.register_child(child);
        }

        Ok(())
    }

    /// Extension points wired for the parent's HTML generation pass.
    ///
    /// Meaningful once [`MultiTargetBuild::run`] has registered the children
    /// on `ctx`; the hooks only see children already present, which is how
    /// the parent's lifecycle keeps them strictly after the join point.
    pub fn html_extensions(&self, ctx: &BuildContext) -> HtmlExtensions {
        let children: Arc<[ChildBuild]> = ctx.children().to_vec().into();
        let fallback_keys: Vec<String> = self
            .targets
            .iter()
            .filter(|target| target.fallback)
            .map(|target| target.key.clone())
            .collect();

        let mut extensions = HtmlExtensions::new();
        extensions.register(Arc::new(AssetAggregator::new(Arc::clone(&children))));
        extensions.register(Arc::new(ScriptTagClassifier::new(&children, &fallback_keys)));
        extensions
    }
}

/// Registered in a base configuration, the orchestrator is recognized by its
/// capability and filtered out of every derived config.
impl BuildPlugin for MultiTargetBuild {
    fn name(&self) -> Cow<'static, str> {
        "multi-target-build".into()
    }

    fn capability(&self) -> PluginCapability {
        PluginCapability::MultiTarget
    }
}

/// Execute child builds concurrently using tokio task spawning (native only).
///
/// Bounded by a semaphore so wide target lists do not oversubscribe the
/// machine.
#[cfg(not(target_family = "wasm"))]
async fn execute_children(
    engine: Arc<dyn BuildEngine>,
    configs: Vec<IsolatedConfig>,
    max_parallel: Option<usize>,
) -> Vec<(String, Result<BuildArtifacts>)> {
    use tokio::sync::Semaphore;
    use tokio::task::JoinSet;

    let max_parallel = max_parallel.unwrap_or_else(|| num_cpus::get().min(8));

    let semaphore = Arc::new(Semaphore::new(max_parallel));
    let mut join_set = JoinSet::new();

    for config in configs {
        let engine = Arc::clone(&engine);
        let permit = Arc::clone(&semaphore);

        join_set.spawn(async move {
            let _permit = permit
                .acquire()
                .await
                .expect("semaphore closed unexpectedly");
            let key = config.target.clone();
            let result = engine
                .execute(config)
                .await
                .map_err(|source| Error::ChildBuild {
                    target: key.clone(),
                    source,
                });
            (key, result)
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(entry) => results.push(entry),
            Err(join_error) => {
                // Task panicked - convert to a child build error
                results.push((
                    "unknown".to_string(),
                    Err(Error::ChildBuild {
                        target: "unknown".to_string(),
                        source: Box::new(join_error),
                    }),
                ));
            }
        }
    }

    results
}

/// Sequential fallback for WASM (single-threaded).
#[cfg(target_family = "wasm")]
async fn execute_children(
    engine: Arc<dyn BuildEngine>,
    configs: Vec<IsolatedConfig>,
    _max_parallel: Option<usize>,
) -> Vec<(String, Result<BuildArtifacts>)> {
    let mut results = Vec::with_capacity(configs.len());
    for config in configs {
        let key = config.target.clone();
        let result = engine
            .execute(config)
            .await
            .map_err(|source| Error::ChildBuild {
                target: key.clone(),
                source,
            });
        results.push((key, result));
    }
    results
}
