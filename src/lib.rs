pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{FsDocumentSource, LocalStorage};
pub use config::style::{GraphStyle, LabelSettings};
pub use crate::core::graph::{format_module_label, format_service_label};
pub use crate::core::{engine::AnalysisEngine, pipeline::AnalysisPipeline};
pub use domain::model::{ConfigModel, Dependency, Module, Service};
pub use utils::error::{AnalysisError, Result};
