use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;

/// Sent date as carried by a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageDate {
    Timestamp(DateTime<FixedOffset>),
    /// Anything that did not parse as a timestamp, kept verbatim.
    Text(String),
}

impl MessageDate {
    /// Parses a transport-header date (RFC 2822, falling back to RFC 3339).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        DateTime::parse_from_rfc2822(trimmed)
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
            .map(MessageDate::Timestamp)
            .unwrap_or_else(|_| MessageDate::Text(raw.to_string()))
    }

    /// `YYYY-MM-DD` for timestamps, the raw text otherwise.
    pub fn file_stamp(&self) -> String {
        match self {
            MessageDate::Timestamp(ts) => ts.format("%Y-%m-%d").to_string(),
            MessageDate::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub subject: String,
    pub body: Option<String>,
    pub date: MessageDate,
}

/// What the renderer receives: already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub source_name: String,
    pub output_name: String,
}
