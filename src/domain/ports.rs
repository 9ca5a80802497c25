use crate::domain::model::{Message, PdfDocument};
use crate::utils::error::Result;
use std::path::Path;

/// Reads one message file from disk.
pub trait MessageSource {
    fn load(&self, path: &Path) -> Result<Message>;
}

/// Lays out a document and writes it to `output`, replacing any existing file.
pub trait DocumentRenderer {
    fn render(&self, document: &PdfDocument, output: &Path) -> Result<()>;
}

pub trait ConfigProvider {
    fn folder(&self) -> &str;
    fn suffix(&self) -> &str;
}

impl<T: MessageSource + ?Sized> MessageSource for &T {
    fn load(&self, path: &Path) -> Result<Message> {
        (**self).load(path)
    }
}

impl<T: DocumentRenderer + ?Sized> DocumentRenderer for &T {
    fn render(&self, document: &PdfDocument, output: &Path) -> Result<()> {
        (**self).render(document, output)
    }
}
