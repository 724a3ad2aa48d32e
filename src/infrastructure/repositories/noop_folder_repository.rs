use crate::domain::errors::DomainResult;
use crate::domain::repositories::FolderRepository;

/// FolderRepository that touches nothing
///
/// Default for sessions that have no filesystem collaborator attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFolderRepository;

impl FolderRepository for NoopFolderRepository {
    fn create_folder(&self, path: &str) -> DomainResult<()> {
        tracing::debug!(path = %path, "Folder creation requested; no collaborator attached");
        Ok(())
    }
}
