use crate::domain::project::{Project, ProjectId};

/// Repository trait for Project aggregate
///
/// Holds the project currently published to the session along with every
/// project confirmed before it.
pub trait ProjectRepository {
    /// Store a project and make it the current one
    fn save(&mut self, project: Project);

    /// The most recently saved project
    fn current(&self) -> Option<&Project>;

    /// Find a project by its ID
    fn find_by_id(&self, id: ProjectId) -> Option<&Project>;

    /// Every project saved this session, oldest first
    fn list(&self) -> &[Project];
}
