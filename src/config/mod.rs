pub mod cli;
pub mod style;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "odl-cfg-analyze")]
#[command(about = "Analyze ODL config subsystem dependencies")]
pub struct CliConfig {
    /// Files or folders containing ODL XML configuration
    #[arg(long, required = true, num_args = 1.., value_name = "FILES/FOLDERS")]
    pub paths_to_analyze: Vec<String>,

    /// Module names to highlight together with their dependencies
    #[arg(long, num_args = 1.., value_name = "MODULE_NAMES")]
    pub highlight_modules: Vec<String>,

    /// `dot`, `json` or any Graphviz output format (jpeg, png, svg, pdf, ...)
    #[arg(long, default_value = "jpeg", value_name = "OUTPUT_FORMAT")]
    pub graph_format: String,

    /// Base name of the generated graph file
    #[arg(long, default_value = "dependencies", value_name = "GENERATED_GRAPH_NAME")]
    pub graph_file_dest: String,

    /// TOML graph style file; the built-in style is used when omitted
    #[arg(long, value_name = "FILE")]
    pub graph_style: Option<String>,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// Print a summary without rendering anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn paths_to_analyze(&self) -> &[String] {
        &self.paths_to_analyze
    }

    fn highlight_modules(&self) -> &[String] {
        &self.highlight_modules
    }

    fn graph_format(&self) -> &str {
        &self.graph_format
    }

    fn graph_file_dest(&self) -> &str {
        &self.graph_file_dest
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for path in &self.paths_to_analyze {
            validation::validate_existing_path(path)?;
        }
        for module in &self.highlight_modules {
            validation::validate_non_empty_string("highlight_modules", module)?;
        }
        validation::validate_format_name("graph_format", &self.graph_format)?;
        validation::validate_path("graph_file_dest", &self.graph_file_dest)?;
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(style) = &self.graph_style {
            validation::validate_path("graph_style", style)?;
        }
        Ok(())
    }
}
