//! Output renderers for dependency graphs.

pub mod dot;
pub mod graphviz;
pub mod json;

use crate::utils::error::Result;
use crate::utils::validation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Graphviz source only.
    Dot,
    Json,
    /// Any format understood by `dot -T`.
    Image(String),
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        let format = format.trim().to_ascii_lowercase();
        validation::validate_format_name("graph_format", &format)?;
        Ok(match format.as_str() {
            "dot" | "gv" => OutputFormat::Dot,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Image(format),
        })
    }

    pub fn extension(&self) -> &str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
            OutputFormat::Image(format) => format,
        }
    }
}
