use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("PDF error: {message}")]
    PdfError { message: String },

    #[error("Failed to parse message {}: {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::ParseError { .. } => ErrorCategory::Input,
            ConvertError::IoError(_) | ConvertError::PdfError { .. } => ErrorCategory::Output,
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::ParseError { .. } | ConvertError::PdfError { .. } => ErrorSeverity::High,
            ConvertError::IoError(_) => ErrorSeverity::Critical,
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::ParseError { path, .. } => {
                format!("Could not read the message file {}", path.display())
            }
            ConvertError::IoError(e) => format!("A file system operation failed: {}", e),
            ConvertError::PdfError { .. } => "The PDF document could not be produced".to_string(),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the file is a valid Outlook message, or move it out of the folder and run again"
            }
            ErrorCategory::Output => "Check free disk space and write permissions on the folder",
            ErrorCategory::Configuration => "Check --folder / --config and that the folder exists",
        }
    }
}

impl From<lopdf::Error> for ConvertError {
    fn from(err: lopdf::Error) -> Self {
        ConvertError::PdfError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
