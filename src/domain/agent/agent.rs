use serde::{Deserialize, Serialize};

use super::value_objects::{AgentId, AgentRole, AgentStatus};

/// A roster entry describing who is doing what
///
/// Agents perform no work themselves. The registry records the status and
/// current task reported by the caller, plus an opaque reference to the
/// external instance the agent is connected to.
///
/// # Invariants
/// - `current_task` is empty while the agent has never been assigned
/// - `id`, `name` and `role` never change after construction
///
/// # Example
/// ```
/// use project_planner::domain::agent::{Agent, AgentRole, AgentStatus};
///
/// let agent = Agent::new("1", "Developer", AgentRole::Developer);
///
/// assert_eq!(agent.status(), AgentStatus::Idle);
/// assert!(agent.current_task().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    id: AgentId,
    name: String,
    role: AgentRole,
    status: AgentStatus,
    current_task: String,
    instance: Option<String>,
}

impl Agent {
    /// Creates an idle agent with no task and no instance
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: AgentRole) -> Self {
        Self {
            id: AgentId::new(id),
            name: name.into(),
            role,
            status: AgentStatus::Idle,
            current_task: String::new(),
            instance: None,
        }
    }

    /// The fixed roster every session starts with
    pub fn seed_roster() -> Vec<Self> {
        vec![
            Agent::new("1", "Developer", AgentRole::Developer),
            Agent::new("2", "Researcher", AgentRole::Researcher),
            Agent::new("3", "Tester", AgentRole::Tester),
            Agent::new("4", "Bug Fixer", AgentRole::BugFixer),
        ]
    }

    /// Replaces the status and current task, leaving every other field alone
    pub fn set_status(&mut self, status: AgentStatus, current_task: impl Into<String>) {
        self.status = status;
        self.current_task = current_task.into();
    }

    /// Replaces the external instance reference
    pub fn connect_instance(&mut self, instance: impl Into<String>) {
        self.instance = Some(instance.into());
    }

    // ===== Getters =====

    /// Returns the agent's ID
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// Returns the agent's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the agent's role
    pub fn role(&self) -> AgentRole {
        self.role
    }

    /// Returns the agent's current status
    pub fn status(&self) -> AgentStatus {
        self.status
    }

    /// Returns the description of the task being worked on, empty when idle
    pub fn current_task(&self) -> &str {
        &self.current_task
    }

    /// Returns the connected instance reference, if any
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }
}
