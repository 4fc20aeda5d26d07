use serde::Serialize;

/// A service reference held by a module. Resolved through the service table,
/// never directly to a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub type_namespace: String,
    pub r#type: String,
    pub name: String,
}

/// A configured module instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub type_namespace: String,
    pub r#type: String,
    pub name: String,
    pub dependencies: Vec<Dependency>,
}

impl Module {
    pub fn key(&self) -> ModuleKey {
        ModuleKey {
            type_namespace: self.type_namespace.clone(),
            r#type: self.r#type.clone(),
            name: self.name.clone(),
        }
    }
}

/// A named service instance and the module that provides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub type_namespace: String,
    pub r#type: String,
    pub name: String,
    pub module_type: String,
    pub module_name: String,
}

impl Service {
    pub fn key(&self) -> ServiceKey {
        ServiceKey {
            type_namespace: self.type_namespace.clone(),
            r#type: self.r#type.clone(),
            name: self.name.clone(),
        }
    }
}

/// Identity of a module node in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleKey {
    pub type_namespace: String,
    pub r#type: String,
    pub name: String,
}

/// Identity of a service, used to label edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServiceKey {
    pub type_namespace: String,
    pub r#type: String,
    pub name: String,
}

/// Modules and services collected from one or more snapshots.
///
/// Entries are kept in insertion order and never deduplicated. Lookups scan
/// linearly and return the first match, so the earlier-merged document wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigModel {
    pub modules: Vec<Module>,
    pub services: Vec<Service>,
}

impl ConfigModel {
    pub fn new(modules: Vec<Module>, services: Vec<Service>) -> Self {
        Self { modules, services }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.services.is_empty()
    }

    /// Concatenate `other` after `self`.
    pub fn merge(mut self, other: ConfigModel) -> ConfigModel {
        self.modules.extend(other.modules);
        self.services.extend(other.services);
        self
    }

    pub fn merge_all<I>(models: I) -> ConfigModel
    where
        I: IntoIterator<Item = ConfigModel>,
    {
        models
            .into_iter()
            .fold(ConfigModel::default(), ConfigModel::merge)
    }

    pub fn find_module(&self, name: &str, module_type: Option<&str>) -> Option<&Module> {
        self.modules.iter().find(|m| {
            m.name == name && module_type.map_or(true, |t| m.r#type == t)
        })
    }

    pub fn find_service(&self, type_namespace: &str, service_type: &str, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| {
            s.type_namespace == type_namespace && s.r#type == service_type && s.name == name
        })
    }

    pub fn dependency_count(&self) -> usize {
        self.modules.iter().map(|m| m.dependencies.len()).sum()
    }
}
