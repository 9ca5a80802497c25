use super::toml_config::TomlConfig;
use super::ConverterSettings;
use crate::core::batch::DEFAULT_MESSAGE_SUFFIX;
use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::logger::LogFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "msg2pdf")]
#[command(about = "Convert every Outlook .msg file in a folder to PDF")]
pub struct CliConfig {
    /// Folder holding the .msg files; PDFs are written next to them
    #[arg(short, long)]
    pub folder: Option<String>,

    /// File name suffix that marks a message file (case-sensitive)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// Merges the optional config file with the flags; flags win.
    pub fn resolve(&self) -> Result<ConverterSettings> {
        let file = self
            .config
            .as_deref()
            .map(TomlConfig::from_file)
            .transpose()?;

        let folder = match (&self.folder, &file) {
            (Some(folder), _) => folder.clone(),
            (None, Some(file)) => file.folder().to_string(),
            (None, None) => {
                return Err(ConvertError::ConfigError {
                    message: "no folder given; pass --folder or set [converter] folder in --config"
                        .to_string(),
                })
            }
        };

        let suffix = self
            .suffix
            .clone()
            .or_else(|| file.as_ref().map(|f| f.suffix().to_string()))
            .unwrap_or_else(|| DEFAULT_MESSAGE_SUFFIX.to_string());

        Ok(ConverterSettings {
            folder,
            suffix,
            verbose: self.verbose || file.as_ref().is_some_and(TomlConfig::verbose),
            log_format: self
                .log_format
                .or_else(|| file.as_ref().map(TomlConfig::log_format))
                .unwrap_or_default(),
        })
    }
}
