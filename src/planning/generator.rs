use crate::domain::project::{Task, TaskId, Template};

use super::templates::library;

/// Synthesizes draft tasks from a project name and template
///
/// Generation is deterministic: the same name and template always produce
/// the same tasks with the same ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskGenerator;

impl TaskGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the task list for a raw template form value
    ///
    /// A blank template yields no tasks. Unknown values use the `other`
    /// catalog.
    ///
    /// # Example
    /// ```
    /// use project_planner::planning::TaskGenerator;
    ///
    /// let generator = TaskGenerator::new();
    ///
    /// assert_eq!(generator.generate("Shop", "e-commerce").len(), 5);
    /// assert!(generator.generate("", "").is_empty());
    /// ```
    pub fn generate(&self, project_name: &str, template: &str) -> Vec<Task> {
        match Template::parse(template) {
            Some(template) => self.generate_for(project_name, template),
            None => {
                tracing::debug!("No template selected; generating no tasks");
                Vec::new()
            }
        }
    }

    /// Generate the task list for a parsed template
    pub fn generate_for(&self, project_name: &str, template: Template) -> Vec<Task> {
        let catalog = library::for_template(template);

        let tasks: Vec<Task> = catalog
            .blueprints
            .iter()
            .enumerate()
            .map(|(index, blueprint)| {
                Task::new(
                    TaskId::sequential(index),
                    blueprint.render(project_name),
                    blueprint.assigned_to,
                    blueprint.priority,
                    blueprint.submodule,
                )
            })
            .collect();

        tracing::debug!(
            template = %template,
            version = catalog.version,
            task_count = tasks.len(),
            "Generated tasks"
        );

        tasks
    }
}
