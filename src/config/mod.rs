#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::batch::DEFAULT_MESSAGE_SUFFIX;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_directory, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// Effective settings for one run, after merging the config file and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterSettings {
    pub folder: String,
    pub suffix: String,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl ConverterSettings {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            suffix: DEFAULT_MESSAGE_SUFFIX.to_string(),
            verbose: false,
            log_format: LogFormat::default(),
        }
    }
}

impl ConfigProvider for ConverterSettings {
    fn folder(&self) -> &str {
        &self.folder
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Validate for ConverterSettings {
    fn validate(&self) -> Result<()> {
        validate_directory("folder", &self.folder)?;
        validate_non_empty_string("suffix", &self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = ConverterSettings::new("/srv/mail");
        assert_eq!(settings.suffix(), ".msg");
        assert!(!settings.verbose);
        assert_eq!(settings.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_validate() {
        let dir = TempDir::new().unwrap();
        let mut settings = ConverterSettings::new(dir.path().to_str().unwrap());
        assert!(settings.validate().is_ok());

        settings.suffix = " ".to_string();
        assert!(settings.validate().is_err());

        assert!(ConverterSettings::new("").validate().is_err());
    }
}
