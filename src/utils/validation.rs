use crate::utils::error::{ConvertError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_directory(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    let dir = Path::new(path);
    if !dir.exists() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Directory does not exist".to_string(),
        });
    }
    if !dir.is_dir() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path is not a directory".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("folder", "/var/mail").is_ok());
        assert!(validate_path("folder", "").is_err());
        assert!(validate_path("folder", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_directory() {
        let dir = TempDir::new().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        assert!(validate_directory("folder", dir_str).is_ok());

        let file_path = dir.path().join("note.txt");
        std::fs::write(&file_path, b"x").unwrap();
        assert!(validate_directory("folder", file_path.to_str().unwrap()).is_err());

        let missing = dir.path().join("missing");
        assert!(validate_directory("folder", missing.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("suffix", ".msg").is_ok());
        assert!(validate_non_empty_string("suffix", "   ").is_err());
    }
}
