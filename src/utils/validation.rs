use crate::utils::error::{AnalysisError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalysisError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸入路徑必須存在 (檔案或目錄)
pub fn validate_existing_path(path: &str) -> Result<()> {
    validate_path("paths_to_analyze", path)?;
    if !std::path::Path::new(path).exists() {
        return Err(AnalysisError::InvalidInputPath {
            path: path.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalysisError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Output formats end up in a file extension and a `-T` flag, keep them plain.
pub fn validate_format_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AnalysisError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Only ASCII letters, digits and '_' are allowed".to_string(),
        });
    }
    Ok(())
}
