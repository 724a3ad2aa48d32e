use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::project::Task;

/// Lifecycle phase of the project draft
///
/// # Phase Transitions
/// ```text
/// Draft -> TasksGenerated -> Confirmed
///               ^  |            |  ^
///               +--+            |  | (confirm again)
///               ^---------------+--+
///                 (regenerate)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    /// Fields are being entered, nothing generated yet
    #[default]
    Draft,
    /// Task list produced and under review
    TasksGenerated,
    /// At least one project has been created from the draft
    Confirmed,
}

impl DraftPhase {
    /// Checks if a transition from current phase to next phase is valid
    ///
    /// # Valid Transitions
    /// - Draft -> TasksGenerated
    /// - TasksGenerated -> TasksGenerated (regenerate)
    /// - TasksGenerated -> Confirmed
    /// - Confirmed -> Confirmed (confirm again)
    /// - Confirmed -> TasksGenerated (regenerate)
    ///
    /// # Example
    /// ```
    /// use project_planner::session::DraftPhase;
    ///
    /// assert!(DraftPhase::Draft.can_transition_to(DraftPhase::TasksGenerated));
    /// assert!(!DraftPhase::Draft.can_transition_to(DraftPhase::Confirmed));
    /// ```
    pub fn can_transition_to(&self, next: DraftPhase) -> bool {
        use DraftPhase::*;
        matches!(
            (self, next),
            (Draft, TasksGenerated)
                | (TasksGenerated, TasksGenerated)
                | (TasksGenerated, Confirmed)
                | (Confirmed, Confirmed)
                | (Confirmed, TasksGenerated)
        )
    }
}

impl fmt::Display for DraftPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftPhase::Draft => write!(f, "draft"),
            DraftPhase::TasksGenerated => write!(f, "tasks_generated"),
            DraftPhase::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// In-progress project state before (and between) confirmations
///
/// Field setters never change the phase; a re-entered name is picked up by
/// the next generation or confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    name: String,
    path: String,
    template: String,
    tasks: Vec<Task>,
    phase: DraftPhase,
    creating_folder: bool,
}

impl ProjectDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// Stores the raw template form value
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Replace the task list and move to `TasksGenerated`
    pub fn record_generated(&mut self, tasks: Vec<Task>) -> DomainResult<()> {
        self.transition(DraftPhase::TasksGenerated)?;
        self.tasks = tasks;
        Ok(())
    }

    /// Move to `Confirmed`, keeping the task list for later confirmations
    pub fn mark_confirmed(&mut self) -> DomainResult<()> {
        self.transition(DraftPhase::Confirmed)
    }

    pub(crate) fn set_creating_folder(&mut self, creating: bool) {
        self.creating_folder = creating;
    }

    /// Checks the fields required before generating tasks
    pub fn validate_for_generation(&self) -> DomainResult<()> {
        require(&self.name, "project name")?;
        require(&self.template, "template")
    }

    /// Checks the fields required before creating a project
    pub fn validate_for_confirmation(&self) -> DomainResult<()> {
        self.validate_for_generation()?;
        require(&self.path, "project path")
    }

    /// Fails with `InvalidTransition` if the draft cannot move to `next`
    pub fn check_transition(&self, next: DraftPhase) -> DomainResult<()> {
        if !self.phase.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.phase.to_string(),
                to: next.to_string(),
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: DraftPhase) -> DomainResult<()> {
        self.check_transition(next)?;
        self.phase = next;
        Ok(())
    }

    // ===== Getters =====

    /// Returns the project name as entered
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project path as entered
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the template value as entered
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the most recently generated tasks
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the current phase of the draft
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// Whether folder creation has been requested and has not failed
    pub fn creating_folder(&self) -> bool {
        self.creating_folder
    }
}

fn require(value: &str, field: &'static str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}
