use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an agent in the registry
///
/// Seeded agents use short numeric strings (`"1"` to `"4"`); the id is never
/// regenerated for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an agent id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        AgentId(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role label carried by an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentRole {
    Developer,
    Researcher,
    Tester,
    #[serde(rename = "Bug Fixer")]
    BugFixer,
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AgentRole::Developer => write!(f, "Developer"),
            AgentRole::Researcher => write!(f, "Researcher"),
            AgentRole::Tester => write!(f, "Tester"),
            AgentRole::BugFixer => write!(f, "Bug Fixer"),
        }
    }
}

/// Reported status of an agent
///
/// The registry stores whatever status the caller reports; no transition
/// rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// No task assigned
    #[default]
    Idle,
    /// Holding a task description
    Working,
    /// Waiting on something outside the planner
    Blocked,
}

impl AgentStatus {
    /// Returns true when the agent holds a task
    pub fn is_busy(&self) -> bool {
        !matches!(self, AgentStatus::Idle)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AgentStatus::Idle => write!(f, "idle"),
            AgentStatus::Working => write!(f, "working"),
            AgentStatus::Blocked => write!(f, "blocked"),
        }
    }
}
