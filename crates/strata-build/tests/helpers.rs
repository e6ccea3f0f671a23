//! Shared test utilities for strata-build tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use strata_build::{
    BuildArtifacts, BuildConfig, BuildEngine, BuildTarget, EngineError, IsolatedConfig, Loader,
    ModuleRule, OutputChunk,
};

/// Engine that replays scripted outcomes per target key and records every
/// execution it sees.
#[derive(Default)]
pub struct ScriptedEngine {
    outcomes: HashMap<String, Result<BuildArtifacts, String>>,
    executed: Mutex<Vec<Execution>>,
}

/// One recorded engine execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub target: String,
    pub entry_names: Vec<String>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(mut self, key: &str, artifacts: BuildArtifacts) -> Self {
        self.outcomes.insert(key.to_string(), Ok(artifacts));
        self
    }

    pub fn fail(mut self, key: &str, message: &str) -> Self {
        self.outcomes
            .insert(key.to_string(), Err(message.to_string()));
        self
    }

    pub fn executed(&self) -> Vec<Execution> {
        self.executed.lock().unwrap().clone()
    }

    pub fn executed_targets(&self) -> Vec<String> {
        let mut targets: Vec<_> = self
            .executed()
            .into_iter()
            .map(|execution| execution.target)
            .collect();
        targets.sort();
        targets
    }
}

#[async_trait]
impl BuildEngine for ScriptedEngine {
    async fn execute(&self, config: IsolatedConfig) -> Result<BuildArtifacts, EngineError> {
        self.executed.lock().unwrap().push(Execution {
            target: config.target.clone(),
            entry_names: config.config.entries.keys().cloned().collect(),
        });

        match self.outcomes.get(&config.target) {
            Some(Ok(artifacts)) => Ok(artifacts.clone()),
            Some(Err(message)) => Err(message.clone().into()),
            None => Ok(BuildArtifacts::default()),
        }
    }
}

/// Base configuration with one entry and a transform rule.
pub fn base_config() -> BuildConfig {
    BuildConfig::new()
        .entry("main", "./src/main.js")
        .rule(ModuleRule::new(Loader::Transform).test(r"\.js$"))
}

pub fn modern_target() -> BuildTarget {
    BuildTarget::new("modern", json!({ "esmodules": true }))
}

pub fn legacy_target() -> BuildTarget {
    BuildTarget::new("legacy", json!({ "browsers": "> 0.5%, ie 11" })).fallback(true)
}

/// Artifacts with a single chunk whose files are also the emitted assets.
pub fn chunk_artifacts(chunk: &str, files: &[&str]) -> BuildArtifacts {
    let files: Vec<String> = files.iter().map(ToString::to_string).collect();
    BuildArtifacts {
        chunks: vec![OutputChunk {
            name: chunk.to_string(),
            files: files.clone(),
            hash: format!("{chunk}-hash"),
            size: 1024,
        }],
        assets: files,
    }
}
