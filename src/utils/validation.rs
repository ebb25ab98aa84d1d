use crate::utils::error::{BundleError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BundleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BundleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BundleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 輸出檔名必須是純檔名，不能帶路徑分隔符
pub fn validate_bare_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('/') || name.contains('\\') {
        return Err(BundleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a bare file name, not a path".to_string(),
        });
    }
    Ok(())
}

/// 排除規則以目錄「名稱」比對單一路徑段，帶分隔符的值永遠不會命中
pub fn validate_dir_names(field_name: &str, names: &[String]) -> Result<()> {
    for name in names {
        validate_non_empty_string(field_name, name)?;

        if name.contains('/') || name.contains('\\') {
            return Err(BundleError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Must be a bare directory name; exclusion matches path segments, not paths"
                    .to_string(),
            });
        }
    }
    Ok(())
}
