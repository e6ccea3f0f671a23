//! Fail-fast setup validation.
//!
//! Everything here runs synchronously before any child build is scheduled.

use rustc_hash::FxHashSet;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::rule::find_transform_rule;
use crate::target::BuildTarget;

/// Validate a target list: non-empty, every key non-empty, keys pairwise
/// unique.
pub fn validate_targets(targets: &[BuildTarget]) -> Result<()> {
    if targets.is_empty() {
        return Err(ConfigError::EmptyTargets);
    }

    let mut seen = FxHashSet::default();
    for (index, target) in targets.iter().enumerate() {
        if target.key.trim().is_empty() {
            return Err(ConfigError::MissingTargetKey { index });
        }
        if !seen.insert(target.key.as_str()) {
            return Err(ConfigError::DuplicateTargetKey {
                key: target.key.clone(),
            });
        }
    }

    Ok(())
}

/// Validate the full orchestrator setup: the target list plus the base
/// configuration's module-transform rule.
pub fn validate_setup(base: &BuildConfig, targets: &[BuildTarget]) -> Result<()> {
    validate_targets(targets)?;

    if find_transform_rule(&base.module.rules).is_none() {
        return Err(ConfigError::MissingTransformRule);
    }

    Ok(())
}
