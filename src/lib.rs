pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::ConverterSettings;

pub use adapters::{LopdfRenderer, OutlookSource};
pub use core::{batch::FolderBatchConverter, converter::MessageConverter};
pub use utils::error::{ConvertError, Result};
