use crate::core::sanitize::sanitize_text;
use crate::core::{DocumentRenderer, Message, MessageSource, PdfDocument};
use crate::utils::error::Result;
use std::path::Path;

pub const EMPTY_BODY_TEXT: &str = "No body content.";

/// Converts a single message file into a PDF.
pub struct MessageConverter<S: MessageSource, R: DocumentRenderer> {
    source: S,
    renderer: R,
}

impl<S: MessageSource, R: DocumentRenderer> MessageConverter<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self { source, renderer }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn convert_message(&self, input_path: &Path, output_path: &Path) -> Result<()> {
        tracing::debug!("Loading message {}", input_path.display());
        let message = self.source.load(input_path)?;

        let document = build_document(&message);
        tracing::debug!(
            "Rendering {} ({} body chars) to {}",
            document.title,
            document.body.chars().count(),
            output_path.display()
        );
        self.renderer.render(&document, output_path)
    }
}

/// Title and body as they appear on the page.
pub fn build_document(message: &Message) -> PdfDocument {
    let title = sanitize_text(&format!("Subject: {}", message.subject));

    // 空內文判斷看的是原始內容，不是清理後的結果
    let body = match message.body.as_deref() {
        Some(body) if !body.is_empty() => sanitize_text(body),
        _ => EMPTY_BODY_TEXT.to_string(),
    };

    PdfDocument { title, body }
}
