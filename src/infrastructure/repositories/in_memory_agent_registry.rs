use crate::domain::agent::{Agent, AgentId};
use crate::domain::repositories::AgentRegistry;
use crate::domain::{DomainError, DomainResult};

/// In-memory implementation of AgentRegistry
///
/// Owns the roster for one session. Each session must get its own
/// instance; nothing here is shared between sessions.
#[derive(Debug, Clone)]
pub struct InMemoryAgentRegistry {
    agents: Vec<Agent>,
}

impl InMemoryAgentRegistry {
    /// Creates a registry over an explicit roster
    ///
    /// # Arguments
    /// * `agents` - Roster in display order; assignment follows this order
    ///
    /// # Errors
    /// Returns `DuplicateAgent` if two agents share an id. Lookups resolve
    /// to the first match, so a repeated id would shadow the later agent.
    pub fn new(agents: Vec<Agent>) -> DomainResult<Self> {
        for (index, agent) in agents.iter().enumerate() {
            if agents[..index].iter().any(|earlier| earlier.id() == agent.id()) {
                return Err(DomainError::DuplicateAgent(agent.id().clone()));
            }
        }

        Ok(Self { agents })
    }

    /// Creates a registry seeded with the default four agents
    pub fn with_seed_roster() -> Self {
        Self {
            agents: Agent::seed_roster(),
        }
    }
}

impl Default for InMemoryAgentRegistry {
    fn default() -> Self {
        Self::with_seed_roster()
    }
}

impl AgentRegistry for InMemoryAgentRegistry {
    fn list(&self) -> &[Agent] {
        &self.agents
    }

    fn find_mut(&mut self, id: &AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|agent| agent.id() == id)
    }
}
