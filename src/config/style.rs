use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Graphviz attributes, e.g. `rankdir = "LR"`.
pub type Attributes = BTreeMap<String, String>;

/// 內建預設樣式
pub const DEFAULT_STYLE: &str = r##"
[graph]
rankdir = "LR"
fontname = "Helvetica"
fontsize = "12"
splines = "true"

[nodes]
shape = "box"
style = "rounded,filled"
fillcolor = "#e3f2fd"
fontname = "Helvetica"
fontsize = "10"

[edges]
fontname = "Helvetica"
fontsize = "8"
color = "#666666"

[nodes_of_interest]
fillcolor = "#ffcc80"
color = "#e65100"
penwidth = "2"

[unresolved_nodes]
style = "dashed"
fillcolor = "#ffffff"
color = "#c62828"

[labels]
module_namespaces = false
module_types = true
service_namespaces = false
service_types = false
"##;

/// Which identity parts appear in node and edge labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    pub module_namespaces: bool,
    pub module_types: bool,
    pub service_namespaces: bool,
    pub service_types: bool,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            module_namespaces: false,
            module_types: true,
            service_namespaces: false,
            service_types: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStyle {
    pub graph: Attributes,
    pub nodes: Attributes,
    pub edges: Attributes,
    pub nodes_of_interest: Attributes,
    #[serde(default)]
    pub unresolved_nodes: Attributes,
    #[serde(default)]
    pub labels: LabelSettings,
}

impl GraphStyle {
    /// 從 TOML 檔案載入樣式
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AnalysisError::StyleError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析樣式
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let style: GraphStyle = toml::from_str(content).map_err(|e| AnalysisError::StyleError {
            message: format!("TOML parsing error: {}", e),
        })?;
        style.validate()?;
        Ok(style)
    }
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self::from_toml_str(DEFAULT_STYLE).expect("built-in style is valid TOML")
    }
}

impl Validate for GraphStyle {
    fn validate(&self) -> Result<()> {
        let tables = [
            ("graph", &self.graph),
            ("nodes", &self.nodes),
            ("edges", &self.edges),
            ("nodes_of_interest", &self.nodes_of_interest),
            ("unresolved_nodes", &self.unresolved_nodes),
        ];
        for (table, attributes) in tables {
            if let Some(key) = attributes.keys().find(|k| !is_attribute_name(k)) {
                return Err(AnalysisError::StyleError {
                    message: format!("invalid attribute name '{}' in [{}]", key, table),
                });
            }
        }
        Ok(())
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
