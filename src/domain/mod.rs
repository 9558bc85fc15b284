mod document;
mod processing_mode;
mod row;

pub use document::{Document, DocumentFormat};
pub use processing_mode::ProcessingMode;
pub use row::{RowRecord, Sheet};
