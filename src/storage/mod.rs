mod artifact_store;
mod errors;

use std::path::Path;

use crate::models::SalesRecord;

pub use artifact_store::CsvArtifactStore;
pub use errors::ArtifactError;

/// Persistence for the cleaned sales summary shared by both components.
pub trait ArtifactStore: Send + Sync + 'static {
    /// Replaces the stored summary with `records`.
    fn save(&self, records: &[SalesRecord]) -> Result<(), ArtifactError>;
    fn load(&self) -> Result<Vec<SalesRecord>, ArtifactError>;
    fn location(&self) -> &Path;
}
