pub mod closure;
pub mod engine;
pub mod graph;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod xml_tree;

pub use crate::domain::graph::{AnalysisResult, DependencyGraph, InterestSet, ResolvedDependency};
pub use crate::domain::model::{ConfigModel, Dependency, Module, Service};
pub use crate::domain::ports::{ConfigProvider, DocumentSource, Pipeline, Storage};
pub use crate::utils::error::Result;
