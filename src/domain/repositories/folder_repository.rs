use crate::domain::errors::DomainResult;

/// Port for the "create folder" action of the project form
///
/// What creating a folder means is up to the implementation; the planner
/// only forwards the draft path.
pub trait FolderRepository {
    fn create_folder(&self, path: &str) -> DomainResult<()>;
}
