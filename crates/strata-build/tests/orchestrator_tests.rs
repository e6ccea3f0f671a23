//! Tests for child build orchestration.
//!
//! These verify:
//! 1. Setup errors block all scheduling - no engine call is ever made
//! 2. Children run concurrently and register deterministically
//! 3. The join is all-or-nothing with the child's error surfaced unmodified

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use helpers::*;
use strata_build::{
    BuildArtifacts, BuildConfig, BuildContext, BuildEngine, BuildPlugin, ConfigError, EngineError,
    Error, IsolatedConfig, Loader, ModuleRule, MultiTargetBuild, PluginCapability,
};

#[tokio::test]
async fn runs_every_child_and_registers_in_declaration_order() {
    let engine = Arc::new(
        ScriptedEngine::new()
            .succeed("modern", chunk_artifacts("modern/main", &["modern/main.1a2b.js"]))
            .succeed("legacy", chunk_artifacts("legacy/main", &["legacy/main.3c4d.js"])),
    );
    let build = MultiTargetBuild::new(base_config(), vec![modern_target(), legacy_target()])
        .expect("valid setup");

    let mut ctx = BuildContext::parent();
    build.run(engine.clone(), &mut ctx).await.expect("run succeeds");

    let names: Vec<_> = ctx.children().iter().map(|child| child.name()).collect();
    assert_eq!(names, ["multi-target/modern", "multi-target/legacy"]);
    assert_eq!(ctx.children()[0].target_key(), Some("modern"));
    assert_eq!(
        ctx.children()[1].artifacts().assets,
        ["legacy/main.3c4d.js"]
    );
    assert_eq!(engine.executed_targets(), ["legacy", "modern"]);
}

#[tokio::test]
async fn engine_receives_namespaced_isolated_configs() {
    let engine = Arc::new(ScriptedEngine::new());
    let build = MultiTargetBuild::new(base_config(), vec![modern_target(), legacy_target()])
        .expect("valid setup");

    let mut ctx = BuildContext::parent();
    build.run(engine.clone(), &mut ctx).await.expect("run succeeds");

    for execution in engine.executed() {
        assert_eq!(
            execution.entry_names,
            vec![format!("{}/main", execution.target)]
        );
    }
}

#[tokio::test]
async fn child_role_suppresses_orchestration() {
    let engine = Arc::new(ScriptedEngine::new());
    let build = MultiTargetBuild::new(base_config(), vec![modern_target(), legacy_target()])
        .expect("valid setup");

    let mut ctx = BuildContext::child();
    build.run(engine.clone(), &mut ctx).await.expect("no-op succeeds");

    assert!(ctx.children().is_empty());
    assert!(engine.executed().is_empty(), "no child build may start");
}

#[tokio::test]
async fn failing_child_surfaces_its_error_unmodified() {
    let engine = Arc::new(
        ScriptedEngine::new()
            .succeed("modern", chunk_artifacts("modern/main", &["modern/main.js"]))
            .fail("legacy", "ie 11 transform exploded"),
    );
    let build = MultiTargetBuild::new(base_config(), vec![modern_target(), legacy_target()])
        .expect("valid setup");

    let mut ctx = BuildContext::parent();
    let error = build
        .run(engine.clone(), &mut ctx)
        .await
        .expect_err("legacy child fails the pass");

    match &error {
        Error::ChildBuild { target, source } => {
            assert_eq!(target, "legacy");
            assert_eq!(source.to_string(), "ie 11 transform exploded");
        }
        other => panic!("expected ChildBuild error, got: {other}"),
    }
    // no partial success: nothing is registered
    assert!(ctx.children().is_empty());
    // both children were still scheduled - failure reporting, not teardown
    assert_eq!(engine.executed_targets(), ["legacy", "modern"]);
}

#[test]
fn zero_targets_rejected_before_any_build() {
    let error = MultiTargetBuild::new(base_config(), Vec::new()).expect_err("empty target list");
    assert!(matches!(error, Error::Config(ConfigError::EmptyTargets)));
}

#[test]
fn missing_transform_rule_rejected_at_setup() {
    let base = BuildConfig::new()
        .entry("main", "./src/main.js")
        .rule(ModuleRule::new(Loader::Css));

    let error = MultiTargetBuild::new(base, vec![modern_target()]).expect_err("no transform rule");
    assert!(matches!(
        error,
        Error::Config(ConfigError::MissingTransformRule)
    ));
}

#[test]
fn duplicate_target_keys_rejected_at_setup() {
    let error = MultiTargetBuild::new(base_config(), vec![modern_target(), modern_target()])
        .expect_err("duplicate keys");
    assert!(matches!(
        error,
        Error::Config(ConfigError::DuplicateTargetKey { .. })
    ));
}

/// Engine that only completes once both children have entered execution.
struct RendezvousEngine {
    barrier: tokio::sync::Barrier,
}

#[async_trait]
impl BuildEngine for RendezvousEngine {
    async fn execute(&self, _config: IsolatedConfig) -> Result<BuildArtifacts, EngineError> {
        self.barrier.wait().await;
        Ok(BuildArtifacts::default())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn children_execute_concurrently() {
    let engine = Arc::new(RendezvousEngine {
        barrier: tokio::sync::Barrier::new(2),
    });
    let build = MultiTargetBuild::new(base_config(), vec![modern_target(), legacy_target()])
        .expect("valid setup")
        .max_parallel(2);

    let mut ctx = BuildContext::parent();
    // deadlocks unless both children run at the same time
    tokio::time::timeout(Duration::from_secs(5), build.run(engine, &mut ctx))
        .await
        .expect("children must rendezvous concurrently")
        .expect("run succeeds");

    assert_eq!(ctx.children().len(), 2);
}

#[tokio::test]
async fn max_parallel_one_still_completes_every_child() {
    let engine = Arc::new(ScriptedEngine::new());
    let build = MultiTargetBuild::new(base_config(), vec![modern_target(), legacy_target()])
        .expect("valid setup")
        .max_parallel(1);

    let mut ctx = BuildContext::parent();
    build.run(engine.clone(), &mut ctx).await.expect("run succeeds");

    assert_eq!(ctx.children().len(), 2);
    assert_eq!(engine.executed_targets(), ["legacy", "modern"]);
}

#[tokio::test]
async fn run_never_mutates_the_base_configuration() {
    let base = base_config();
    let entries_before = base.entries.clone();
    let module_before = base.module.clone();

    let build = MultiTargetBuild::new(base.clone(), vec![modern_target(), legacy_target()])
        .expect("valid setup");
    let mut ctx = BuildContext::parent();
    build
        .run(Arc::new(ScriptedEngine::new()), &mut ctx)
        .await
        .expect("run succeeds");

    assert_eq!(base.entries, entries_before);
    assert_eq!(base.module, module_before);
}

#[test]
fn orchestrator_carries_the_multi_target_capability() {
    let build =
        MultiTargetBuild::new(base_config(), vec![modern_target()]).expect("valid setup");
    assert_eq!(build.capability(), PluginCapability::MultiTarget);
}
