use crate::core::batch::DEFAULT_MESSAGE_SUFFIX;
use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::logger::LogFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub converter: ConverterSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterSection {
    pub folder: String,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn folder(&self) -> &str {
        &self.converter.folder
    }

    fn suffix(&self) -> &str {
        self.converter
            .suffix
            .as_deref()
            .unwrap_or(DEFAULT_MESSAGE_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[converter]
folder = "/srv/mail"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.folder(), "/srv/mail");
        assert_eq!(config.suffix(), ".msg");
        assert!(!config.verbose());
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_parse_logging_section() {
        let toml_content = r#"
[converter]
folder = "/srv/mail"
suffix = ".MSG"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.suffix(), ".MSG");
        assert!(config.verbose());
        assert_eq!(config.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MSG2PDF_TEST_FOLDER", "/data/inbox");

        let toml_content = r#"
[converter]
folder = "${MSG2PDF_TEST_FOLDER}/2024"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.folder(), "/data/inbox/2024");

        std::env::remove_var("MSG2PDF_TEST_FOLDER");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let toml_content = r#"
[converter]
folder = "${MSG2PDF_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.folder(), "${MSG2PDF_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let result = TomlConfig::from_toml_str("[logging]\nverbose = true\n");
        assert!(matches!(result, Err(ConvertError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[converter]\nfolder = \"/srv/archive\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.folder(), "/srv/archive");
    }
}
