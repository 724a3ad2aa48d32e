use serde::{Deserialize, Serialize};

use super::value_objects::{Priority, Submodule, TaskId};

/// A unit of synthesized work belonging to a project
///
/// `assigned_to` is a free-text suggestion set at generation time and is
/// not checked against the agent registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub assigned_to: String,
    pub priority: Priority,
    pub submodule: Submodule,
}

impl Task {
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        assigned_to: impl Into<String>,
        priority: Priority,
        submodule: Submodule,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            assigned_to: assigned_to.into(),
            priority,
            submodule,
        }
    }
}
