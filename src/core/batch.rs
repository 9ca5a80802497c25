use crate::core::converter::MessageConverter;
use crate::core::sanitize::sanitize_filename;
use crate::core::{ConversionJob, DocumentRenderer, Message, MessageSource};
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_MESSAGE_SUFFIX: &str = ".msg";

/// Converts every message file directly inside a folder, writing the PDFs
/// next to their sources. Stops at the first failure.
pub struct FolderBatchConverter<S: MessageSource, R: DocumentRenderer> {
    converter: MessageConverter<S, R>,
    suffix: String,
}

impl<S: MessageSource, R: DocumentRenderer> FolderBatchConverter<S, R> {
    pub fn new(converter: MessageConverter<S, R>) -> Self {
        Self::with_suffix(converter, DEFAULT_MESSAGE_SUFFIX)
    }

    pub fn with_suffix(converter: MessageConverter<S, R>, suffix: impl Into<String>) -> Self {
        Self {
            converter,
            suffix: suffix.into(),
        }
    }

    /// Converts the folder, printing one progress line per file to stdout.
    pub fn convert_folder(&self, folder_path: &Path) -> Result<Vec<ConversionJob>> {
        self.convert_folder_with_progress(folder_path, &mut std::io::stdout().lock())
    }

    /// Same as [`convert_folder`](Self::convert_folder), with progress lines
    /// written to `progress` instead of stdout.
    pub fn convert_folder_with_progress<W: Write>(
        &self,
        folder_path: &Path,
        progress: &mut W,
    ) -> Result<Vec<ConversionJob>> {
        tracing::info!("📂 Scanning {} for *{} files", folder_path.display(), self.suffix);

        let mut completed = Vec::new();
        for (input_path, source_name) in self.list_messages(folder_path)? {
            // 先讀一次取日期與主旨，轉換時會再讀一次
            let message = self.converter.source().load(&input_path)?;
            let output_name = output_file_name(&message);
            let output_path = folder_path.join(&output_name);

            self.converter.convert_message(&input_path, &output_path)?;

            writeln!(progress, "{}", progress_line(&source_name, &output_name))?;
            tracing::info!("✅ {} -> {}", source_name, output_name);

            completed.push(ConversionJob {
                input_path,
                output_path,
                source_name,
                output_name,
            });
        }

        tracing::info!("Converted {} message(s)", completed.len());
        Ok(completed)
    }

    /// Direct children whose name ends with the suffix, in directory order.
    fn list_messages(&self, folder_path: &Path) -> Result<Vec<(PathBuf, String)>> {
        let mut found = Vec::new();
        for entry in fs::read_dir(folder_path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(&self.suffix) {
                found.push((entry.path(), name));
            } else {
                tracing::debug!("Skipping {}", name);
            }
        }
        Ok(found)
    }
}

pub fn progress_line(source_name: &str, output_name: &str) -> String {
    format!("Converted {} to PDF as {}.", source_name, output_name)
}

/// `{date} - {subject}.pdf`, passed through the filename sanitizer as a whole.
pub fn output_file_name(message: &Message) -> String {
    let candidate = format!("{} - {}.pdf", message.date.file_stamp(), message.subject);
    sanitize_filename(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MessageDate;
    use chrono::DateTime;

    #[test]
    fn test_output_file_name_with_timestamp() {
        let message = Message {
            subject: "Q1 Report".to_string(),
            body: None,
            date: MessageDate::Timestamp(
                DateTime::parse_from_rfc2822("Fri, 15 Mar 2024 09:00:00 +0000").unwrap(),
            ),
        };
        assert_eq!(output_file_name(&message), "2024-03-15 - Q1 Report.pdf");
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(
            progress_line("a.msg", "2024-01-01 - Hi.pdf"),
            "Converted a.msg to PDF as 2024-01-01 - Hi.pdf."
        );
    }

    #[test]
    fn test_output_file_name_with_text_date() {
        let message = Message {
            subject: "Invoice #42: PAID!".to_string(),
            body: None,
            date: MessageDate::Text("March 2024".to_string()),
        };
        assert_eq!(output_file_name(&message), "march 2024 - Invoice #42 Paid.pdf");
    }
}
