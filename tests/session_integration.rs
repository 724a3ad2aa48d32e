//! End-to-end session integration tests
//!
//! These tests drive a full planning session against the in-memory
//! adapters, covering:
//! - Task generation for every template
//! - Project confirmation and positional agent assignment
//! - Copy semantics across repeated confirmations
//! - Strict validation and the serialized session view

use project_planner::config::SessionConfig;
use project_planner::domain::agent::{Agent, AgentId, AgentRole, AgentStatus};
use project_planner::domain::project::{ProjectEvent, Submodule};
use project_planner::domain::repositories::{AgentRegistry, ProjectRepository};
use project_planner::domain::DomainError;
use project_planner::infrastructure::repositories::{
    InMemoryAgentRegistry, InMemoryProjectRepository,
};
use project_planner::session::{DraftPhase, ProjectSession};
use serde_json::json;
use std::collections::HashSet;

type Session = ProjectSession<InMemoryAgentRegistry, InMemoryProjectRepository>;

/// Setup a lenient session with the form filled in
fn setup_session(name: &str, path: &str, template: &str) -> Session {
    let mut session = ProjectSession::in_memory(SessionConfig::default());
    session.set_project_name(name);
    session.set_project_path(path);
    session.set_template(template);
    session
}

/// Setup a session over a roster of `size` developers
fn setup_session_with_roster(size: usize, template: &str) -> Session {
    let agents = (0..size)
        .map(|i| Agent::new((i + 1).to_string(), format!("Agent {}", i + 1), AgentRole::Developer))
        .collect();
    let mut session = ProjectSession::new(
        InMemoryAgentRegistry::new(agents).expect("roster ids are unique"),
        InMemoryProjectRepository::new(),
        SessionConfig::default(),
    );
    session.set_project_name("Atlas");
    session.set_template(template);
    session
}

fn working_agents(session: &Session) -> usize {
    session
        .agents()
        .iter()
        .filter(|a| a.status() == AgentStatus::Working)
        .count()
}

#[test]
fn test_generated_tasks_use_known_submodules_and_unique_ids() {
    for template in ["e-commerce", "ai", "other", "custom"] {
        let mut session = setup_session("Atlas", "/srv/atlas", template);

        session.generate_tasks().expect("Generation should succeed");

        let tasks = session.draft().tasks();
        assert!(!tasks.is_empty(), "{} should generate tasks", template);
        assert!(tasks.iter().all(|t| Submodule::ALL.contains(&t.submodule)));
        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tasks.len(), "Task ids should be unique");
    }
}

#[test]
fn test_shop_example_assigns_first_four_tasks() {
    let mut session = setup_session("Shop", "/srv/shop", "e-commerce");
    session.generate_tasks().expect("Generation should succeed");
    assert_eq!(session.draft().tasks().len(), 5);

    let (project, events) = session.create_project().expect("Confirmation should succeed");

    let agents = session.agents();
    let names: Vec<&str> = agents.iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["Developer", "Researcher", "Tester", "Bug Fixer"]);
    for (index, agent) in agents.iter().enumerate() {
        assert_eq!(agent.status(), AgentStatus::Working);
        assert_eq!(agent.current_task(), project.tasks()[index].description);
    }

    let fifth = &project.tasks()[4];
    assert!(agents.iter().all(|a| a.current_task() != fifth.description));
    assert!(!events.iter().any(|e| matches!(
        e,
        ProjectEvent::AgentAssigned { task_id, .. } if *task_id == fifth.id
    )));
}

#[test]
fn test_assignment_touches_min_of_tasks_and_agents() {
    // 5 tasks per template; vary the roster around that
    for roster_size in [0, 1, 4, 5, 8] {
        let mut session = setup_session_with_roster(roster_size, "ai");
        session.generate_tasks().expect("Generation should succeed");
        let task_count = session.draft().tasks().len();

        let (_, events) = session.create_project().expect("Confirmation should succeed");

        let expected = roster_size.min(task_count);
        assert_eq!(working_agents(&session), expected);
        assert_eq!(events.len(), 1 + expected);
        for agent in session.agents().iter().skip(expected) {
            assert_eq!(agent.status(), AgentStatus::Idle);
            assert_eq!(agent.current_task(), "");
        }
    }
}

#[test]
fn test_duplicate_roster_ids_are_rejected_before_assignment() {
    let result = InMemoryAgentRegistry::new(vec![
        Agent::new("1", "A", AgentRole::Developer),
        Agent::new("1", "B", AgentRole::Tester),
    ]);
    assert_eq!(
        result.unwrap_err(),
        DomainError::DuplicateAgent(AgentId::new("1"))
    );

    let registry = InMemoryAgentRegistry::new(vec![
        Agent::new("1", "A", AgentRole::Developer),
        Agent::new("2", "B", AgentRole::Tester),
    ])
    .expect("roster ids are unique");
    let mut session = ProjectSession::new(
        registry,
        InMemoryProjectRepository::new(),
        SessionConfig::default(),
    );
    session.set_project_name("Shop");
    session.set_template("e-commerce");
    session.generate_tasks().expect("Generation should succeed");

    let (project, events) = session.create_project().expect("Confirmation should succeed");

    assert_eq!(working_agents(&session), 2);
    assert_eq!(events.len(), 3);
    let assigned: HashSet<&str> = events
        .iter()
        .filter_map(|e| match e {
            ProjectEvent::AgentAssigned { agent_id, .. } => Some(agent_id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(assigned, HashSet::from(["1", "2"]));
    for (index, agent) in session.agents().iter().enumerate() {
        assert_eq!(agent.current_task(), project.tasks()[index].description);
    }
}

#[test]
fn test_empty_form_generates_and_confirms_without_error() {
    let mut session = setup_session("", "", "");

    let event = session.generate_tasks().expect("Lenient generation never fails");
    assert_eq!(
        event,
        ProjectEvent::TasksGenerated {
            template: None,
            task_count: 0
        }
    );

    let (project, _) = session.create_project().expect("Lenient confirmation never fails");
    assert!(project.tasks().is_empty());
    assert_eq!(working_agents(&session), 0);
}

#[test]
fn test_double_confirmation_copies_task_list() {
    let mut session = setup_session("Shop", "/srv/shop", "e-commerce");
    session.generate_tasks().expect("Generation should succeed");

    let (first, _) = session.create_project().expect("First confirmation");
    let (second, _) = session.create_project().expect("Second confirmation");

    assert_ne!(first.id(), second.id(), "Each confirmation gets a new identity");
    assert_eq!(first.tasks(), second.tasks());
    assert_eq!(session.store().list().len(), 2);
    assert_eq!(session.current_project().map(|p| p.id()), Some(second.id()));

    // Mutating one project's tasks leaves the other and the draft untouched
    let mut first_tasks = first.into_tasks();
    first_tasks[0].description = "Rewritten".to_string();
    assert_ne!(second.tasks()[0].description, "Rewritten");
    assert_ne!(session.draft().tasks()[0].description, "Rewritten");
    let stored = session
        .store()
        .find_by_id(second.id())
        .expect("Second project should be stored");
    assert_eq!(stored.tasks(), second.tasks());
}

#[test]
fn test_task_count_is_fixed_at_generation_time() {
    let mut session = setup_session("Shop", "/srv/shop", "e-commerce");
    session.generate_tasks().expect("Generation should succeed");
    let generated = session.draft().tasks().to_vec();

    // Changing the template without regenerating does not change the tasks
    session.set_template("");
    let (project, _) = session.create_project().expect("Confirmation should succeed");

    assert_eq!(project.tasks(), generated.as_slice());
}

#[test]
fn test_regenerate_after_confirmation() {
    let mut session = setup_session("Lab", "/srv/lab", "ai");
    session.generate_tasks().expect("Generation should succeed");
    session.create_project().expect("Confirmation should succeed");
    assert_eq!(session.phase(), DraftPhase::Confirmed);

    session.set_template("other");
    session.generate_tasks().expect("Regeneration should succeed");

    assert_eq!(session.phase(), DraftPhase::TasksGenerated);
    assert!(session.draft().tasks()[0].description.contains("Lab"));
}

#[test]
fn test_unknown_agent_update_leaves_registry_unchanged() {
    let mut session = setup_session("Shop", "/srv/shop", "e-commerce");
    let before = session.agents().to_vec();

    session.registry_mut().update_status(
        &AgentId::new("does-not-exist"),
        AgentStatus::Working,
        "Ghost task".to_string(),
    );
    session.registry_mut().update_status(
        &AgentId::new("does-not-exist"),
        AgentStatus::Working,
        "Ghost task".to_string(),
    );

    assert_eq!(session.agents(), before.as_slice());
    assert_eq!(
        session.registry_mut().try_update_status(
            &AgentId::new("does-not-exist"),
            AgentStatus::Working,
            String::new(),
        ),
        Err(DomainError::AgentNotFound(AgentId::new("does-not-exist")))
    );
}

#[test]
fn test_strict_mode_blocks_incomplete_forms() {
    let config = SessionConfig::default().strict(true);
    let mut session = ProjectSession::in_memory(config);
    session.set_project_name("Shop");

    assert_eq!(
        session.generate_tasks(),
        Err(DomainError::MissingField("template"))
    );

    session.set_template("e-commerce");
    session.generate_tasks().expect("Complete form should generate");
    assert!(matches!(
        session.create_project(),
        Err(DomainError::MissingField("project path"))
    ));
    assert_eq!(working_agents(&session), 0);

    session.set_project_path("/srv/shop");
    session.create_project().expect("Complete form should confirm");
    assert_eq!(working_agents(&session), 4);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = setup_session("Shop", "/srv/shop", "e-commerce");
    let second = setup_session("Shop", "/srv/shop", "e-commerce");

    first.generate_tasks().expect("Generation should succeed");
    first.create_project().expect("Confirmation should succeed");

    assert_eq!(working_agents(&first), 4);
    assert_eq!(working_agents(&second), 0);
    assert!(second.current_project().is_none());
}

#[test]
fn test_snapshot_json_shape() {
    let mut session = setup_session("Shop", "/srv/shop", "e-commerce");
    session.generate_tasks().expect("Generation should succeed");
    let first_id = session.draft().tasks()[0].id.clone();
    session.toggle_task_expansion(&first_id);
    session.create_project().expect("Confirmation should succeed");

    let snapshot = session.snapshot().to_json().expect("Snapshot should serialize");

    assert_eq!(snapshot["draft"]["name"], "Shop");
    assert_eq!(snapshot["draft"]["template"], "e-commerce");
    assert_eq!(snapshot["draft"]["phase"], "confirmed");
    assert_eq!(snapshot["draft"]["creatingFolder"], false);
    assert_eq!(snapshot["agents"][3]["role"], "Bug Fixer");
    assert_eq!(snapshot["agents"][3]["status"], "working");
    assert_eq!(
        snapshot["project"]["submodules"],
        json!(["Setup", "Frontend", "Backend", "Database", "Testing"])
    );
    assert_eq!(snapshot["project"]["tasks"][0]["assignedTo"], "Developer");
    assert_eq!(snapshot["expandedTasks"], json!(["task-1"]));
}
