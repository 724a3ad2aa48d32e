//! Integration tests for repository layer
//!
//! These tests verify that the in-memory adapters honour the domain port
//! contracts through the public API: roster ordering, lookup-or-noop
//! mutation, and project publication order.

use project_planner::domain::agent::{Agent, AgentId, AgentRole, AgentStatus};
use project_planner::domain::project::{Project, ProjectId};
use project_planner::domain::repositories::{AgentRegistry, FolderRepository, ProjectRepository};
use project_planner::infrastructure::repositories::{
    InMemoryAgentRegistry, InMemoryProjectRepository, NoopFolderRepository,
};
use project_planner::planning::TaskGenerator;

#[test]
fn test_registry_status_update_and_reset() {
    let mut registry = InMemoryAgentRegistry::default();
    let tester = AgentId::new("3");

    registry.update_status(&tester, AgentStatus::Working, "Run the suite".to_string());
    assert_eq!(
        registry.find(&tester).map(|a| a.current_task()),
        Some("Run the suite")
    );

    registry.update_status(&tester, AgentStatus::Idle, String::new());
    let agent = registry.find(&tester).expect("Tester should exist");
    assert_eq!(agent.status(), AgentStatus::Idle);
    assert_eq!(agent.current_task(), "");
}

#[test]
fn test_registry_instance_and_status_are_independent() {
    let mut registry = InMemoryAgentRegistry::default();
    let developer = AgentId::new("1");

    registry.connect_to_instance(&developer, "http://localhost:11434".to_string());
    registry.update_status(&developer, AgentStatus::Blocked, "Waiting on review".to_string());
    registry.connect_to_instance(&developer, "http://gpu-box:11434".to_string());

    let agent = registry.find(&developer).expect("Developer should exist");
    assert_eq!(agent.instance(), Some("http://gpu-box:11434"));
    assert_eq!(agent.status(), AgentStatus::Blocked);
    assert_eq!(agent.current_task(), "Waiting on review");
}

#[test]
fn test_custom_roster_keeps_order() {
    let registry = InMemoryAgentRegistry::new(vec![
        Agent::new("b", "Beta", AgentRole::Tester),
        Agent::new("a", "Alpha", AgentRole::Researcher),
    ])
    .expect("roster ids are unique");

    let ids: Vec<&str> = registry.list().iter().map(|a| a.id().as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_project_repository_history() {
    let mut store = InMemoryProjectRepository::new();
    let tasks = TaskGenerator::new().generate("Shop", "e-commerce");

    let (first, _) = Project::new("Shop", "/srv/shop", tasks.clone());
    let (second, _) = Project::new("Shop v2", "/srv/shop", tasks);
    let first_id = first.id();
    let second_id = second.id();
    store.save(first);
    store.save(second);

    let ids: Vec<ProjectId> = store.list().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![first_id, second_id]);
    assert_eq!(store.current().map(|p| p.name()), Some("Shop v2"));
    assert_eq!(
        store.find_by_id(first_id).map(|p| p.tasks().len()),
        Some(5)
    );
}

#[test]
fn test_noop_folder_repository_is_usable_as_trait_object() {
    let folders: Box<dyn FolderRepository> = Box::new(NoopFolderRepository);

    assert!(folders.create_folder("/srv/shop").is_ok());
}
