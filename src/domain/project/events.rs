use serde::{Deserialize, Serialize};

use super::value_objects::{ProjectId, TaskId, Template};
use crate::domain::agent::AgentId;

/// Domain events raised while planning a project
///
/// Operations return the events they cause so a UI layer can react to them
/// without polling session state.
///
/// # Example
/// ```
/// use project_planner::domain::project::events::ProjectEvent;
/// use project_planner::domain::project::ProjectId;
///
/// let project_id = ProjectId::generate();
/// let event = ProjectEvent::Created {
///     project_id,
///     name: "Shop".to_string(),
///     task_count: 5,
/// };
///
/// assert_eq!(event.project_id(), Some(project_id));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectEvent {
    /// Fired when the draft task list is (re)generated
    TasksGenerated {
        /// Template the tasks came from, `None` when none was selected
        template: Option<Template>,
        /// Number of tasks in the new draft list
        task_count: usize,
    },
    /// Fired when a project is confirmed and published
    Created {
        project_id: ProjectId,
        name: String,
        task_count: usize,
    },
    /// Fired once per agent that received a task on confirmation
    AgentAssigned {
        project_id: ProjectId,
        agent_id: AgentId,
        task_id: TaskId,
    },
}

impl ProjectEvent {
    /// Returns the project this event belongs to, if it was raised after
    /// confirmation
    pub fn project_id(&self) -> Option<ProjectId> {
        match self {
            ProjectEvent::TasksGenerated { .. } => None,
            ProjectEvent::Created { project_id, .. } => Some(*project_id),
            ProjectEvent::AgentAssigned { project_id, .. } => Some(*project_id),
        }
    }
}
