//! Graphviz DOT renderer.
//!
//! The output can be fed to Graphviz directly:
//!   odl-cfg-analyze --paths-to-analyze cfg/ --graph-format dot
//!   dot -Tsvg dependencies.dot -o dependencies.svg

use crate::config::style::{Attributes, GraphStyle};
use crate::domain::graph::{DependencyGraph, NodeKind};

/// Render a dependency graph as a DOT digraph.
pub fn render(graph: &DependencyGraph, style: &GraphStyle) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("digraph dependencies {\n");
    push_defaults(&mut out, "graph", &style.graph);
    push_defaults(&mut out, "node", &style.nodes);
    push_defaults(&mut out, "edge", &style.edges);
    out.push('\n');

    let plain = Attributes::new();
    for node in &graph.nodes {
        let attributes = if node.highlighted {
            &style.nodes_of_interest
        } else if node.kind == NodeKind::Unresolved {
            &style.unresolved_nodes
        } else {
            &plain
        };
        out.push_str(&format!("    \"{}\"{};\n", escape(&node.label), attribute_list(attributes)));
    }

    if !graph.edges.is_empty() {
        out.push('\n');
    }
    for edge in &graph.edges {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
            escape(&edge.source),
            escape(&edge.target),
            escape(&edge.label),
        ));
    }

    out.push_str("}\n");
    out
}

fn push_defaults(out: &mut String, kind: &str, attributes: &Attributes) {
    if !attributes.is_empty() {
        out.push_str(&format!("    {}{};\n", kind, attribute_list(attributes)));
    }
}

fn attribute_list(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, escape(value)))
        .collect();
    format!(" [{}]", pairs.join(", "))
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::{GraphEdge, GraphNode};

    fn node(label: &str, kind: NodeKind, highlighted: bool) -> GraphNode {
        GraphNode {
            label: label.to_string(),
            module_name: label.to_string(),
            kind,
            highlighted,
        }
    }

    fn style() -> GraphStyle {
        GraphStyle::from_toml_str(
            r##"
[graph]
rankdir = "LR"
[nodes]
shape = "box"
[edges]
[nodes_of_interest]
color = "red"
[unresolved_nodes]
style = "dashed"
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_render_nodes_and_edges() {
        let graph = DependencyGraph {
            nodes: vec![
                node("a", NodeKind::Configured, true),
                node("b", NodeKind::Configured, false),
                node("UNKNOWNx", NodeKind::Unresolved, false),
            ],
            edges: vec![
                GraphEdge {
                    source: "a".to_string(),
                    target: "b".to_string(),
                    label: "svc".to_string(),
                },
                GraphEdge {
                    source: "a".to_string(),
                    target: "UNKNOWNx".to_string(),
                    label: "UNKNOWNx".to_string(),
                },
            ],
        };
        let dot = render(&graph, &style());

        assert!(dot.starts_with("digraph dependencies {\n"));
        assert!(dot.contains("    graph [rankdir=\"LR\"];\n"));
        assert!(dot.contains("    node [shape=\"box\"];\n"));
        assert!(!dot.contains("    edge ["));
        assert!(dot.contains("    \"a\" [color=\"red\"];\n"));
        assert!(dot.contains("    \"b\";\n"));
        assert!(dot.contains("    \"UNKNOWNx\" [style=\"dashed\"];\n"));
        assert!(dot.contains("    \"a\" -> \"b\" [label=\"svc\"];\n"));
        assert_eq!(dot.matches(" -> ").count(), 2);
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let graph = DependencyGraph {
            nodes: vec![node("{urn_x}\"quoted\"", NodeKind::Configured, false)],
            edges: vec![],
        };
        let dot = render(&graph, &style());
        assert!(dot.contains("\"{urn_x}\\\"quoted\\\"\";"));
    }
}
