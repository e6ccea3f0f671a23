//! Parent build context and child build registration.

use crate::engine::BuildArtifacts;

/// Reserved name prefix identifying child builds spawned by the orchestrator.
///
/// The asset aggregator and the tag classifier select children by this
/// prefix; children registered by other collaborators are left alone.
pub const CHILD_BUILD_PREFIX: &str = "multi-target/";

/// Role of the running build within the parent/child hierarchy.
///
/// Threaded through [`BuildContext`] so the recursion guard is an explicit,
/// testable value rather than an inference from missing metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildRole {
    #[default]
    Parent,
    Child,
}

/// A completed child build registered on the parent context.
#[derive(Debug, Clone)]
pub struct ChildBuild {
    name: String,
    artifacts: BuildArtifacts,
}

impl ChildBuild {
    /// A child owned by the orchestrator, named with the reserved prefix.
    pub fn for_target(key: &str, artifacts: BuildArtifacts) -> Self {
        Self {
            name: format!("{CHILD_BUILD_PREFIX}{key}"),
            artifacts,
        }
    }

    /// A child registered by another collaborator under its own name.
    pub fn named(name: impl Into<String>, artifacts: BuildArtifacts) -> Self {
        Self {
            name: name.into(),
            artifacts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target key for orchestrator-owned children, `None` otherwise.
    pub fn target_key(&self) -> Option<&str> {
        self.name.strip_prefix(CHILD_BUILD_PREFIX)
    }

    pub fn is_multi_target(&self) -> bool {
        self.name.starts_with(CHILD_BUILD_PREFIX)
    }

    pub fn artifacts(&self) -> &BuildArtifacts {
        &self.artifacts
    }
}

/// The parent build's view of one build pass.
///
/// Children are registered here by the orchestrator once their pipelines
/// complete; the HTML-generation hooks read them after the join point, so
/// the context never has concurrent writers.
#[derive(Debug, Default)]
pub struct BuildContext {
    role: BuildRole,
    children: Vec<ChildBuild>,
}

impl BuildContext {
    /// Context for a top-level build.
    pub fn parent() -> Self {
        Self::default()
    }

    /// Context for a build already running as somebody's child. The
    /// orchestrator refuses to re-orchestrate under this role.
    pub fn child() -> Self {
        Self {
            role: BuildRole::Child,
            children: Vec::new(),
        }
    }

    pub fn role(&self) -> BuildRole {
        self.role
    }

    pub fn children(&self) -> &[ChildBuild] {
        &self.children
    }

    pub fn register_child(&mut self, child: ChildBuild) {
        self.children.push(child);
    }

    /// Children carrying the reserved multi-target prefix.
    pub fn multi_target_children(&self) -> impl Iterator<Item = &ChildBuild> {
        self.children.iter().filter(|child| child.is_multi_target())
    }
}
