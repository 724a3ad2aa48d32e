use crate::domain::project::{Project, ProjectId};
use crate::domain::repositories::ProjectRepository;

/// In-memory implementation of ProjectRepository
///
/// Keeps every project confirmed during the session. The last one saved is
/// the current project.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Vec<Project>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn save(&mut self, project: Project) {
        tracing::debug!(project_id = %project.id(), "Publishing project");
        self.projects.push(project);
    }

    fn current(&self) -> Option<&Project> {
        self.projects.last()
    }

    fn find_by_id(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    fn list(&self) -> &[Project] {
        &self.projects
    }
}
