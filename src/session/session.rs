use serde::Serialize;

use super::draft::{DraftPhase, ProjectDraft};
use super::review::TaskReview;
use crate::config::SessionConfig;
use crate::domain::agent::Agent;
use crate::domain::errors::DomainResult;
use crate::domain::project::{Project, ProjectEvent, TaskId, Template};
use crate::domain::repositories::{AgentRegistry, FolderRepository, ProjectRepository};
use crate::infrastructure::repositories::{
    InMemoryAgentRegistry, InMemoryProjectRepository, NoopFolderRepository,
};
use crate::planning::{assign_by_index, TaskGenerator};

/// One planning session
///
/// Owns the draft and the review state, and receives the agent registry,
/// project store and folder port by injection. All mutation goes through
/// `&mut self`, so handlers run one at a time. Dropping the session ends
/// it; nothing outlives it.
///
/// # Example
/// ```
/// use project_planner::config::SessionConfig;
/// use project_planner::session::ProjectSession;
///
/// let mut session = ProjectSession::in_memory(SessionConfig::default());
/// session.set_project_name("Shop");
/// session.set_template("e-commerce");
/// session.generate_tasks().expect("lenient generation");
///
/// let (project, events) = session.create_project().expect("tasks generated");
///
/// assert_eq!(project.tasks().len(), 5);
/// assert_eq!(events.len(), 5); // Created + four assignments
/// ```
pub struct ProjectSession<R, S> {
    registry: R,
    store: S,
    folders: Box<dyn FolderRepository>,
    generator: TaskGenerator,
    draft: ProjectDraft,
    review: TaskReview,
    config: SessionConfig,
}

impl ProjectSession<InMemoryAgentRegistry, InMemoryProjectRepository> {
    /// Session over a fresh seed roster and an empty in-memory store
    pub fn in_memory(config: SessionConfig) -> Self {
        Self::new(
            InMemoryAgentRegistry::with_seed_roster(),
            InMemoryProjectRepository::new(),
            config,
        )
    }
}

impl<R, S> ProjectSession<R, S>
where
    R: AgentRegistry,
    S: ProjectRepository,
{
    /// Creates a session over the given registry and store
    ///
    /// Folder creation goes to a no-op port until one is attached with
    /// [`ProjectSession::with_folder_repository`].
    pub fn new(registry: R, store: S, config: SessionConfig) -> Self {
        tracing::info!(
            agents = registry.len(),
            strict = config.strict_validation,
            "Starting project session"
        );

        Self {
            registry,
            store,
            folders: Box::new(NoopFolderRepository),
            generator: TaskGenerator::new(),
            draft: ProjectDraft::new(),
            review: TaskReview::new(),
            config,
        }
    }

    pub fn with_folder_repository(mut self, folders: Box<dyn FolderRepository>) -> Self {
        self.folders = folders;
        self
    }

    // ===== Form fields =====

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.draft.set_name(name);
    }

    pub fn set_project_path(&mut self, path: impl Into<String>) {
        self.draft.set_path(path);
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.draft.set_template(template);
    }

    // ===== Actions =====

    /// Generate the draft task list from the current name and template
    ///
    /// Overwrites any previously generated list. In strict mode a blank
    /// name or template is rejected and the draft is left unchanged.
    pub fn generate_tasks(&mut self) -> DomainResult<ProjectEvent> {
        if self.config.strict_validation {
            self.draft.validate_for_generation()?;
        }

        let tasks = self
            .generator
            .generate(self.draft.name(), self.draft.template());
        let task_count = tasks.len();
        self.draft.record_generated(tasks)?;

        tracing::info!(
            project = %self.draft.name(),
            template = %self.draft.template(),
            task_count,
            "Tasks generated"
        );

        Ok(ProjectEvent::TasksGenerated {
            template: Template::parse(self.draft.template()),
            task_count,
        })
    }

    /// Finalize a project from the draft and hand tasks to agents
    ///
    /// The project gets a copy of the draft task list, is saved as the
    /// current project, and then agent `i` is set working on task `i`.
    ///
    /// # Returns
    /// * `Ok((Project, Vec<ProjectEvent>))` - The project and its `Created`
    ///   and `AgentAssigned` events
    /// * `Err(DomainError)` - If no tasks were generated yet, or a strict
    ///   mode field check fails
    pub fn create_project(&mut self) -> DomainResult<(Project, Vec<ProjectEvent>)> {
        self.draft.check_transition(DraftPhase::Confirmed)?;
        if self.config.strict_validation {
            self.draft.validate_for_confirmation()?;
        }

        let (project, mut events) = Project::new(
            self.draft.name(),
            self.draft.path(),
            self.draft.tasks().to_vec(),
        );
        self.draft.mark_confirmed()?;
        self.store.save(project.clone());

        events.extend(assign_by_index(
            &mut self.registry,
            project.id(),
            project.tasks(),
        ));

        tracing::info!(
            project_id = %project.id(),
            name = %project.name(),
            task_count = project.tasks().len(),
            "Project created"
        );

        Ok((project, events))
    }

    /// Expand or collapse a task in the review list
    ///
    /// # Returns
    /// `true` if the task is expanded afterwards
    pub fn toggle_task_expansion(&mut self, id: &TaskId) -> bool {
        self.review.toggle(id)
    }

    pub fn is_task_expanded(&self, id: &TaskId) -> bool {
        self.review.is_expanded(id)
    }

    /// Ask the folder port to create the draft path
    ///
    /// The draft's `creating_folder` flag is cleared again if the port fails.
    pub fn request_folder_creation(&mut self) -> DomainResult<()> {
        self.draft.set_creating_folder(true);
        let result = self.folders.create_folder(self.draft.path());
        if let Err(e) = &result {
            tracing::warn!(path = %self.draft.path(), "Folder creation failed: {}", e);
            self.draft.set_creating_folder(false);
        }
        result
    }

    // ===== Accessors =====

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn phase(&self) -> DraftPhase {
        self.draft.phase()
    }

    pub fn agents(&self) -> &[Agent] {
        self.registry.list()
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable registry access for status reports from outside the planner
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.store.current()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Serializable view of the whole session for a UI layer
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            draft: &self.draft,
            agents: self.registry.list(),
            project: self.store.current(),
            expanded_tasks: &self.review,
        }
    }
}

/// Borrowed, serializable view of a session
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot<'a> {
    pub draft: &'a ProjectDraft,
    pub agents: &'a [Agent],
    pub project: Option<&'a Project>,
    pub expanded_tasks: &'a TaskReview,
}

impl SessionSnapshot<'_> {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
