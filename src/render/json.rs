//! JSON renderer.

use crate::domain::graph::DependencyGraph;
use crate::utils::error::Result;

/// Render a dependency graph as pretty-printed JSON.
pub fn render(graph: &DependencyGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}
