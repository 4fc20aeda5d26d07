//! Labels and graph assembly.

use crate::config::style::LabelSettings;
use crate::domain::graph::{
    DependencyGraph, GraphEdge, GraphNode, InterestSet, NodeKind, ResolvedDependency,
};
use crate::domain::model::{ConfigModel, ModuleKey, ServiceKey};
use std::collections::HashSet;

fn label(namespace: &str, r#type: &str, name: &str, show_namespace: bool, show_type: bool) -> String {
    let mut text = String::new();
    if show_namespace && !namespace.is_empty() {
        text.push('{');
        text.push_str(&namespace.replace(':', "_"));
        text.push('}');
    }
    if show_type {
        text.push_str(&format!("({})", r#type));
    }
    text.push_str(name);
    text
}

pub fn format_module_label(module: &ModuleKey, settings: &LabelSettings) -> String {
    label(
        &module.type_namespace,
        &module.r#type,
        &module.name,
        settings.module_namespaces,
        settings.module_types,
    )
}

pub fn format_service_label(service: &ServiceKey, settings: &LabelSettings) -> String {
    label(
        &service.type_namespace,
        &service.r#type,
        &service.name,
        settings.service_namespaces,
        settings.service_types,
    )
}

/// One node per distinct module label, one edge per resolved dependency.
pub fn build_graph(
    model: &ConfigModel,
    dependencies: &[ResolvedDependency],
    interest: &InterestSet,
    settings: &LabelSettings,
) -> DependencyGraph {
    let mut graph = DependencyGraph::default();
    let mut seen = HashSet::new();

    for module in &model.modules {
        let label = format_module_label(&module.key(), settings);
        if seen.insert(label.clone()) {
            graph.nodes.push(GraphNode {
                label,
                module_name: module.name.clone(),
                kind: NodeKind::Configured,
                highlighted: interest.contains(&module.name),
            });
        }
    }

    for dep in dependencies {
        let target = format_module_label(&dep.target, settings);
        if dep.resolution.is_stub() && seen.insert(target.clone()) {
            graph.nodes.push(GraphNode {
                label: target.clone(),
                module_name: dep.target.name.clone(),
                kind: NodeKind::Unresolved,
                highlighted: false,
            });
        }
        graph.edges.push(GraphEdge {
            source: format_module_label(&dep.source, settings),
            target,
            label: format_service_label(&dep.service, settings),
        });
    }

    graph
}
