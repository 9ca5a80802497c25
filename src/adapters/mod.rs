// Adapters layer: concrete implementations of the domain ports.

pub mod outlook;
pub mod pdf;

pub use outlook::OutlookSource;
pub use pdf::LopdfRenderer;
