pub mod batch;
pub mod converter;
pub mod sanitize;

pub use crate::domain::model::{ConversionJob, Message, MessageDate, PdfDocument};
pub use crate::domain::ports::{ConfigProvider, DocumentRenderer, MessageSource};
pub use crate::utils::error::Result;
