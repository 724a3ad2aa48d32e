use crate::domain::agent::{AgentId, AgentStatus};
use crate::domain::project::{ProjectEvent, ProjectId, Task};
use crate::domain::repositories::AgentRegistry;

/// Hand one task to each agent by position
///
/// Agent `i` receives task `i` for every `i < min(agents, tasks)`. Extra
/// tasks stay unassigned and extra agents keep their current state.
///
/// # Returns
/// One `AgentAssigned` event per agent that was updated, in roster order
pub fn assign_by_index<R>(registry: &mut R, project_id: ProjectId, tasks: &[Task]) -> Vec<ProjectEvent>
where
    R: AgentRegistry + ?Sized,
{
    let agent_ids: Vec<AgentId> = registry
        .list()
        .iter()
        .map(|agent| agent.id().clone())
        .collect();

    let mut events = Vec::with_capacity(agent_ids.len().min(tasks.len()));
    for (agent_id, task) in agent_ids.into_iter().zip(tasks) {
        registry.update_status(&agent_id, AgentStatus::Working, task.description.clone());
        tracing::debug!(
            project_id = %project_id,
            agent_id = %agent_id,
            task_id = %task.id,
            "Assigned task"
        );
        events.push(ProjectEvent::AgentAssigned {
            project_id,
            agent_id,
            task_id: task.id.clone(),
        });
    }

    if tasks.len() > events.len() {
        tracing::debug!(
            project_id = %project_id,
            unassigned = tasks.len() - events.len(),
            "More tasks than agents; surplus tasks left unassigned"
        );
    }

    events
}
