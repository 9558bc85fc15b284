mod extraction;
mod prompt;
mod reconcile;
mod tabular_service;
mod text_service;

pub use extraction::{extract_records, ExtractionError};
pub use prompt::{build_tabular_prompt, build_text_prompt};
pub use reconcile::reconcile;
pub use tabular_service::{TabularPipelineError, TabularService};
pub use text_service::{TextOutcome, TextService};
