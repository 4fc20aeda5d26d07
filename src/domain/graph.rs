use crate::domain::model::{ConfigModel, ModuleKey, ServiceKey};
use serde::Serialize;
use std::collections::HashSet;

/// How a dependency edge found its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Resolved,
    /// No service matched the reference; target and service are synthesized.
    UnknownService,
    /// The service exists but names a module absent from the configuration.
    MissingProvider,
}

impl Resolution {
    pub fn is_stub(&self) -> bool {
        !matches!(self, Resolution::Resolved)
    }
}

/// A module-to-module edge derived through a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub source: ModuleKey,
    pub target: ModuleKey,
    pub service: ServiceKey,
    pub resolution: Resolution,
}

/// Module names selected for highlighting, in first-visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterestSet {
    names: Vec<String>,
    #[serde(skip)]
    index: HashSet<String>,
}

impl InterestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the name was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.index.contains(name) {
            return false;
        }
        self.index.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Configured,
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub label: String,
    pub module_name: String,
    pub kind: NodeKind,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Labelled graph handed to the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    pub fn node(&self, label: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    pub fn highlighted_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.highlighted).count()
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub model: ConfigModel,
    pub dependencies: Vec<ResolvedDependency>,
    pub interest: InterestSet,
    pub graph: DependencyGraph,
}

impl AnalysisResult {
    pub fn unresolved_count(&self) -> usize {
        self.dependencies
            .iter()
            .filter(|d| d.resolution.is_stub())
            .count()
    }
}
