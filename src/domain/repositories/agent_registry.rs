use crate::domain::agent::{Agent, AgentId, AgentStatus};
use crate::domain::errors::{DomainError, DomainResult};

/// Registry trait for the agent roster
///
/// Defines the contract for reading and mutating the fixed list of agents.
/// Agents are never added or removed through this trait; only their status,
/// current task and instance reference change.
pub trait AgentRegistry {
    /// Current ordered snapshot of the roster
    fn list(&self) -> &[Agent];

    /// Mutable access to a single agent
    fn find_mut(&mut self, id: &AgentId) -> Option<&mut Agent>;

    /// Find an agent by its ID
    fn find(&self, id: &AgentId) -> Option<&Agent> {
        self.list().iter().find(|agent| agent.id() == id)
    }

    /// Number of agents in the roster
    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Replace status and current task of an agent, reporting unknown ids
    fn try_update_status(
        &mut self,
        id: &AgentId,
        status: AgentStatus,
        current_task: String,
    ) -> DomainResult<()> {
        let agent = self
            .find_mut(id)
            .ok_or_else(|| DomainError::AgentNotFound(id.clone()))?;
        agent.set_status(status, current_task);
        Ok(())
    }

    /// Replace the instance reference of an agent, reporting unknown ids
    fn try_connect_to_instance(&mut self, id: &AgentId, instance: String) -> DomainResult<()> {
        let agent = self
            .find_mut(id)
            .ok_or_else(|| DomainError::AgentNotFound(id.clone()))?;
        agent.connect_instance(instance);
        Ok(())
    }

    /// Replace status and current task of an agent
    ///
    /// Unknown ids are a silent no-op.
    fn update_status(&mut self, id: &AgentId, status: AgentStatus, current_task: String) {
        if let Err(e) = self.try_update_status(id, status, current_task) {
            tracing::debug!(agent_id = %id, "Status update ignored: {}", e);
        }
    }

    /// Replace the instance reference of an agent
    ///
    /// Unknown ids are a silent no-op.
    fn connect_to_instance(&mut self, id: &AgentId, instance: String) {
        if let Err(e) = self.try_connect_to_instance(id, instance) {
            tracing::debug!(agent_id = %id, "Instance connection ignored: {}", e);
        }
    }
}
