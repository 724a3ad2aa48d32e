use super::events::ProjectEvent;
use super::task::Task;
use super::value_objects::{ProjectId, Submodule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project aggregate root
///
/// A finalized project built from a confirmed draft. The project owns its
/// task list by value, so later changes to the draft or to another project
/// never reach it.
///
/// # Invariants
/// - Task count equals the draft task count at confirmation time
/// - Submodules are always the fixed five labels
/// - Never mutated after construction
///
/// # Example
/// ```
/// use project_planner::domain::project::Project;
///
/// let (project, events) = Project::new("Shop", "/srv/shop", Vec::new());
///
/// assert_eq!(project.name(), "Shop");
/// assert_eq!(project.submodules().len(), 5);
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: String,
    path: String,
    tasks: Vec<Task>,
    submodules: Vec<Submodule>,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new Project aggregate
    ///
    /// # Arguments
    /// * `name` - Project name, accepted as-is
    /// * `path` - Filesystem path, opaque and never validated
    /// * `tasks` - The draft task list, moved into the project
    ///
    /// # Returns
    /// The new project and the `Created` event it raised
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        tasks: Vec<Task>,
    ) -> (Self, Vec<ProjectEvent>) {
        let project = Self {
            id: ProjectId::generate(),
            name: name.into(),
            path: path.into(),
            tasks,
            submodules: Submodule::ALL.to_vec(),
            created_at: Utc::now(),
        };

        let events = vec![ProjectEvent::Created {
            project_id: project.id,
            name: project.name.clone(),
            task_count: project.tasks.len(),
        }];

        (project, events)
    }

    // ===== Getters =====

    /// Returns the project's ID
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project folder path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the tasks in generation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the submodules the project is split into
    pub fn submodules(&self) -> &[Submodule] {
        &self.submodules
    }

    /// Returns when the project was confirmed
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Consumes the project and hands back its task list
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}
