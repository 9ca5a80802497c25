use crate::core::{Message, MessageDate, MessageSource};
use crate::utils::error::{ConvertError, Result};
use msg_parser::Outlook;
use std::path::Path;

/// Reads Outlook `.msg` files (OLE compound documents).
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlookSource;

impl OutlookSource {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSource for OutlookSource {
    fn load(&self, path: &Path) -> Result<Message> {
        let outlook = Outlook::from_path(path).map_err(|e| ConvertError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // msg_parser 以空字串表示缺少的欄位
        Ok(message_from_fields(
            outlook.subject,
            outlook.body,
            &outlook.headers.date,
        ))
    }
}

fn message_from_fields(subject: String, body: String, date: &str) -> Message {
    Message {
        subject,
        body: if body.is_empty() { None } else { Some(body) },
        date: MessageDate::parse(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_message_from_fields() {
        let message = message_from_fields(
            "Q1 Report".to_string(),
            "See numbers.".to_string(),
            "Fri, 15 Mar 2024 08:15:00 +0000",
        );
        assert_eq!(message.subject, "Q1 Report");
        assert_eq!(message.body.as_deref(), Some("See numbers."));
        assert_eq!(message.date.file_stamp(), "2024-03-15");
    }

    #[test]
    fn test_empty_body_is_absent() {
        let message = message_from_fields(String::new(), String::new(), "");
        assert!(message.body.is_none());
        assert_eq!(message.date, MessageDate::Text(String::new()));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.msg");
        std::fs::write(&path, b"this is not an OLE compound file").unwrap();

        let result = OutlookSource::new().load(&path);
        assert!(matches!(result, Err(ConvertError::ParseError { .. })));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let result = OutlookSource::new().load(&dir.path().join("missing.msg"));
        assert!(matches!(result, Err(ConvertError::ParseError { .. })));
    }
}
