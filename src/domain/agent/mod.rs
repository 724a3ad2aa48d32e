// Agent domain module
// Contains the agent record and its value objects

#![allow(clippy::module_inception)]

pub mod agent;
pub mod value_objects;

// Re-export main types for convenience
pub use agent::Agent;
pub use value_objects::{AgentId, AgentRole, AgentStatus};
