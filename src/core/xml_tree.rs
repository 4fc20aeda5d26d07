//! Owned element tree built from a `roxmltree` document.
//!
//! Every element keeps the namespace bindings that were in scope where it was
//! written, so a `prefix:local` value can later be resolved exactly as the
//! author of that element saw it, even when a prefix is redeclared elsewhere.

use crate::utils::error::{AnalysisError, Result};
use std::sync::Arc;

/// Deepest element nesting accepted in a document.
pub const MAX_DEPTH: usize = 1024;

/// Prefix bindings visible at one element. `None` is the default namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceScope {
    bindings: Vec<(Option<String>, String)>,
}

impl NamespaceScope {
    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let bindings = node
            .namespaces()
            .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
            .collect();
        Self { bindings }
    }

    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p.as_deref() == Some(prefix))
            .map(|(_, uri)| uri.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub namespace: Option<String>,
    pub name: String,
    /// Text before the first child element.
    pub text: String,
    pub scope: Arc<NamespaceScope>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Build the tree under the document's root element. `origin` names the
    /// document in errors.
    pub fn from_document(doc: &roxmltree::Document<'_>, origin: &str) -> Result<Self> {
        Self::from_node(doc.root_element(), None, 1, origin)
    }

    fn from_node(
        node: roxmltree::Node<'_, '_>,
        parent_scope: Option<&Arc<NamespaceScope>>,
        depth: usize,
        origin: &str,
    ) -> Result<Self> {
        if depth > MAX_DEPTH {
            return Err(AnalysisError::XmlParse {
                document: origin.to_string(),
                message: format!("elements nested deeper than {}", MAX_DEPTH),
            });
        }

        let own = NamespaceScope::from_node(node);
        // Siblings without their own declarations share the parent's scope.
        let scope = match parent_scope {
            Some(parent) if **parent == own => Arc::clone(parent),
            _ => Arc::new(own),
        };

        let children = node
            .children()
            .filter(|c| c.is_element())
            .map(|c| XmlElement::from_node(c, Some(&scope), depth + 1, origin))
            .collect::<Result<Vec<_>>>()?;

        Ok(XmlElement {
            namespace: node.tag_name().namespace().map(str::to_string),
            name: node.tag_name().name().to_string(),
            text: node.text().unwrap_or_default().to_string(),
            scope,
            children,
        })
    }

    pub fn is(&self, namespace: Option<&str>, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == namespace
    }

    pub fn child(&self, namespace: Option<&str>, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.is(namespace, name))
    }

    pub fn children_named<'a>(
        &'a self,
        namespace: Option<&'a str>,
        name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.is(namespace, name))
    }

    /// Pre-order walk starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn resolve_prefix(&self, prefix: &str) -> Option<&str> {
        self.scope.resolve(prefix)
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> XmlElement {
        let doc = roxmltree::Document::parse(xml).unwrap();
        XmlElement::from_document(&doc, "test.xml").unwrap()
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let root = parse("<a><b><c/></b><d/></a>");
        let names: Vec<&str> = root.descendants().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_scope_inherits_and_shadows() {
        let root = parse(
            r#"<a xmlns:p="urn:outer"><b/><c xmlns:p="urn:inner"><d/></c></a>"#,
        );
        let b = root.child(None, "b").unwrap();
        let c = root.child(None, "c").unwrap();
        let d = c.child(None, "d").unwrap();
        assert_eq!(b.resolve_prefix("p"), Some("urn:outer"));
        assert_eq!(c.resolve_prefix("p"), Some("urn:inner"));
        assert_eq!(d.resolve_prefix("p"), Some("urn:inner"));
        assert_eq!(b.resolve_prefix("q"), None);
    }

    #[test]
    fn test_text_is_leading_text_only() {
        let root = parse("<a> head <b>inner</b> tail</a>");
        assert_eq!(root.text, " head ");
        assert_eq!(root.child(None, "b").unwrap().text, "inner");
    }

    #[test]
    fn test_nesting_limit_is_an_error() {
        let depth = MAX_DEPTH + 1;
        let xml = format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let err = XmlElement::from_document(&doc, "deep.xml").unwrap_err();
        assert!(matches!(err, AnalysisError::XmlParse { ref document, .. } if document == "deep.xml"));

        let xml = format!("{}{}", "<a>".repeat(MAX_DEPTH), "</a>".repeat(MAX_DEPTH));
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let root = XmlElement::from_document(&doc, "ok.xml").unwrap();
        assert_eq!(root.descendants().count(), MAX_DEPTH);
    }

    #[test]
    fn test_namespaced_child_lookup() {
        let root = parse(r#"<a xmlns="urn:x"><b/><b xmlns="urn:y"/></a>"#);
        assert_eq!(root.children_named(Some("urn:x"), "b").count(), 1);
        assert!(root.child(Some("urn:y"), "b").is_some());
        assert!(root.child(None, "b").is_none());
    }
}
