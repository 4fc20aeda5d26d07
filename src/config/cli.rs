use crate::core::{DocumentSource, Storage};
use crate::utils::error::{AnalysisError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads snapshots from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsDocumentSource;

impl FsDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FsDocumentSource {
    /// A file stands for itself; a directory for the `*.xml` files directly in it.
    fn list_documents(&self, location: &Path) -> Result<Vec<PathBuf>> {
        if location.is_file() {
            return Ok(vec![location.to_path_buf()]);
        }
        if !location.is_dir() {
            return Err(AnalysisError::InvalidInputPath {
                path: location.display().to_string(),
            });
        }

        let mut documents = Vec::new();
        for entry in fs::read_dir(location)? {
            let path = entry?.path();
            let is_xml = path.extension().and_then(|e| e.to_str()) == Some("xml");
            if is_xml && path.is_file() {
                documents.push(path);
            }
        }
        // 排序讓輸出可重現
        documents.sort();
        Ok(documents)
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}
