//! Snapshot XML → [`ConfigModel`].

use crate::core::xml_tree::XmlElement;
use crate::domain::model::{ConfigModel, Dependency, Module, Service};
use crate::utils::error::{AnalysisError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub const NETCONF_NS: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";
pub const CONFIG_NS: &str = "urn:opendaylight:params:xml:ns:yang:controller:config";

fn provider_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"/modules/module\[type='(.+)'\]\[name='(.+)'\]").expect("valid provider regex")
    })
}

/// Parse one snapshot document. `origin` names the document in errors.
pub fn parse_document(source: &str, origin: &str) -> Result<ConfigModel> {
    let doc = roxmltree::Document::parse(source).map_err(|e| AnalysisError::XmlParse {
        document: origin.to_string(),
        message: e.to_string(),
    })?;
    let root = XmlElement::from_document(&doc, origin)?;

    // A later snapshot replaces an earlier one.
    let Some(snapshot) = root.descendants().filter(|e| e.is(None, "snapshot")).last() else {
        tracing::debug!("No <snapshot> in {}, skipping", origin);
        return Ok(ConfigModel::default());
    };

    let parser = SnapshotParser { origin };
    let modules = data_sections(snapshot)
        .flat_map(|data| data.children_named(Some(CONFIG_NS), "modules"))
        .flat_map(|modules| modules.children_named(Some(CONFIG_NS), "module"))
        .map(|m| parser.parse_module(m))
        .collect::<Result<Vec<_>>>()?;

    let mut services = Vec::new();
    for service in data_sections(snapshot)
        .flat_map(|data| data.children_named(Some(CONFIG_NS), "services"))
        .flat_map(|services| services.children_named(Some(CONFIG_NS), "service"))
    {
        services.extend(parser.parse_service(service)?);
    }

    if modules.is_empty() && services.is_empty() {
        return Ok(ConfigModel::default());
    }

    tracing::debug!(
        "Parsed {}: {} modules, {} services",
        origin,
        modules.len(),
        services.len()
    );
    Ok(ConfigModel::new(modules, services))
}

fn data_sections(snapshot: &XmlElement) -> impl Iterator<Item = &XmlElement> {
    snapshot
        .children_named(None, "configuration")
        .flat_map(|cfg| cfg.children_named(Some(NETCONF_NS), "data"))
}

struct SnapshotParser<'a> {
    origin: &'a str,
}

impl SnapshotParser<'_> {
    fn parse_module(&self, module: &XmlElement) -> Result<Module> {
        let type_element = self.require(module, get_child(module, "type"), "type")?;
        let (type_namespace, r#type) = self.qualified_type(type_element)?;
        let name_element = self.require(module, module.child(Some(CONFIG_NS), "name"), "name")?;

        let mut dependencies = Vec::new();
        for child in &module.children {
            for candidate in child.descendants().filter(|e| is_dependency(e)) {
                dependencies.push(self.parse_dependency(candidate)?);
            }
        }

        Ok(Module {
            type_namespace,
            r#type,
            name: name_element.text.trim().to_string(),
            dependencies,
        })
    }

    fn parse_dependency(&self, element: &XmlElement) -> Result<Dependency> {
        let type_element = self.require(element, get_child(element, "type"), "type")?;
        let name_element = self.require(element, get_child(element, "name"), "name")?;
        let (type_namespace, r#type) = self.qualified_type(type_element)?;

        Ok(Dependency {
            type_namespace,
            r#type,
            name: name_element.text.trim().to_string(),
        })
    }

    /// One service record per `<instance>`.
    fn parse_service(&self, service: &XmlElement) -> Result<Vec<Service>> {
        let type_element = self.require(service, get_child(service, "type"), "type")?;
        let (type_namespace, r#type) = self.qualified_type(type_element)?;

        service
            .children_named(Some(CONFIG_NS), "instance")
            .map(|instance| -> Result<Service> {
                let name = self.require(instance, instance.child(Some(CONFIG_NS), "name"), "name")?;
                let provider =
                    self.require(instance, instance.child(Some(CONFIG_NS), "provider"), "provider")?;
                let (module_type, module_name) = self.parse_provider(provider.text.trim())?;

                Ok(Service {
                    type_namespace: type_namespace.clone(),
                    r#type: r#type.clone(),
                    name: name.text.trim().to_string(),
                    module_type,
                    module_name,
                })
            })
            .collect()
    }

    fn parse_provider(&self, provider: &str) -> Result<(String, String)> {
        let caps = provider_regex().captures(provider).ok_or_else(|| {
            AnalysisError::MalformedProviderReference {
                document: self.origin.to_string(),
                provider: provider.to_string(),
            }
        })?;
        Ok((caps[1].to_string(), caps[2].to_string()))
    }

    /// Split `prefix:local` and resolve the prefix in the scope of `element`,
    /// falling back to the element's own namespace.
    fn qualified_type(&self, element: &XmlElement) -> Result<(String, String)> {
        let (prefix, local) = match element.text.split_once(':') {
            Some((prefix, local)) => (Some(prefix.trim()), local.trim()),
            None => (None, element.text.trim()),
        };

        let namespace = prefix
            .and_then(|p| element.resolve_prefix(p))
            .or(element.namespace.as_deref())
            .ok_or_else(|| AnalysisError::MalformedElement {
                document: self.origin.to_string(),
                element: element.name.clone(),
                reason: format!("cannot resolve namespace of '{}'", element.text.trim()),
            })?;

        Ok((namespace.to_string(), local.to_string()))
    }

    fn require<'e>(
        &self,
        parent: &XmlElement,
        child: Option<&'e XmlElement>,
        name: &str,
    ) -> Result<&'e XmlElement> {
        child.ok_or_else(|| AnalysisError::MalformedElement {
            document: self.origin.to_string(),
            element: parent.name.clone(),
            reason: format!("missing <{}> child", name),
        })
    }
}

/// Child in the config namespace, else in the parent's own namespace.
fn get_child<'a>(element: &'a XmlElement, name: &str) -> Option<&'a XmlElement> {
    element
        .child(Some(CONFIG_NS), name)
        .or_else(|| element.child(element.namespace.as_deref(), name))
}

/// A dependency reference is any element with exactly a `type` and a `name` child.
fn is_dependency(element: &XmlElement) -> bool {
    element.children.len() == 2
        && get_child(element, "type").is_some()
        && get_child(element, "name").is_some()
}
