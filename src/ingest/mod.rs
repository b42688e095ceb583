mod batch;
mod engine;
mod errors;

pub use batch::{list_csv_files, FileOutcome};
pub use engine::{IngestEngine, IngestOutcome};
pub use errors::IngestError;
