use thiserror::Error;

use super::agent::AgentId;

/// Errors that can occur while planning a project
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Agent not found: {0}")]
    AgentNotFound(AgentId),

    #[error("Duplicate agent id in roster: {0}")]
    DuplicateAgent(AgentId),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Folder creation failed: {0}")]
    Folder(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
