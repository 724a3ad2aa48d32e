use serde::{Deserialize, Serialize};

use crate::domain::project::TaskId;

/// Which generated tasks are expanded in the review list
///
/// Purely presentational state; it is not part of the task entity and is
/// not reset when tasks are regenerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskReview {
    expanded: Vec<TaskId>,
}

impl TaskReview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a collapsed task or collapse an expanded one
    ///
    /// # Returns
    /// `true` if the task is expanded afterwards
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        if let Some(position) = self.expanded.iter().position(|e| e == id) {
            self.expanded.remove(position);
            false
        } else {
            self.expanded.push(id.clone());
            true
        }
    }

    pub fn is_expanded(&self, id: &TaskId) -> bool {
        self.expanded.contains(id)
    }

    /// Expanded ids in the order they were opened
    pub fn expanded(&self) -> &[TaskId] {
        &self.expanded
    }
}
