//! Module → service → module resolution.

use crate::domain::graph::{Resolution, ResolvedDependency};
use crate::domain::model::{ConfigModel, Dependency, Module, ModuleKey, ServiceKey};

pub const UNKNOWN_PREFIX: &str = "UNKNOWN";

/// Resolve every dependency of every module, in model order.
///
/// Never fails: a reference to a service that does not exist becomes an
/// `UNKNOWN<name>` stub, a service whose provider module is absent becomes a
/// stub carrying the provider's type and name.
pub fn resolve_dependencies(model: &ConfigModel) -> Vec<ResolvedDependency> {
    model
        .modules
        .iter()
        .flat_map(|module| {
            module
                .dependencies
                .iter()
                .map(move |dep| resolve_dependency(model, module, dep))
        })
        .collect()
}

pub fn resolve_dependency(model: &ConfigModel, module: &Module, dep: &Dependency) -> ResolvedDependency {
    let source = module.key();

    let Some(service) = model.find_service(&dep.type_namespace, &dep.r#type, &dep.name) else {
        tracing::debug!(
            "{} depends on unknown service {}:{} '{}'",
            module.name,
            dep.type_namespace,
            dep.r#type,
            dep.name
        );
        let stub_name = format!("{}{}", UNKNOWN_PREFIX, dep.name);
        return ResolvedDependency {
            source,
            target: ModuleKey {
                type_namespace: dep.type_namespace.clone(),
                r#type: dep.r#type.clone(),
                name: stub_name.clone(),
            },
            service: ServiceKey {
                type_namespace: dep.type_namespace.clone(),
                r#type: dep.r#type.clone(),
                name: stub_name,
            },
            resolution: Resolution::UnknownService,
        };
    };

    match model.find_module(&service.module_name, Some(&service.module_type)) {
        Some(target) => ResolvedDependency {
            source,
            target: target.key(),
            service: service.key(),
            resolution: Resolution::Resolved,
        },
        None => {
            tracing::debug!(
                "Service '{}' is provided by missing module ({}){}",
                service.name,
                service.module_type,
                service.module_name
            );
            ResolvedDependency {
                source,
                target: ModuleKey {
                    type_namespace: String::new(),
                    r#type: service.module_type.clone(),
                    name: service.module_name.clone(),
                },
                service: service.key(),
                resolution: Resolution::MissingProvider,
            }
        }
    }
}
