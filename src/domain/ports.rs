use crate::domain::model::ConfigModel;
use crate::domain::graph::AnalysisResult;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where configuration snapshots come from.
pub trait DocumentSource {
    /// Expand one user supplied location into the documents it stands for.
    fn list_documents(&self, location: &Path) -> Result<Vec<PathBuf>>;
    fn read_document(&self, path: &Path) -> Result<String>;
}

/// Where rendered artifacts go.
pub trait Storage {
    /// Write `data` under `path` and return the location actually written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn paths_to_analyze(&self) -> &[String];
    fn highlight_modules(&self) -> &[String];
    fn graph_format(&self) -> &str;
    fn graph_file_dest(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ConfigModel>;
    fn transform(&self, model: ConfigModel) -> Result<AnalysisResult>;
    fn load(&self, result: AnalysisResult) -> Result<String>;
}
