// Task templates for project generation
//
// Each project template expands into one task per submodule. Templates are
// versioned so a change to the catalog is visible in generated output.

use crate::domain::project::{Priority, Submodule, Template};

/// Placeholder replaced with the project name when a blueprint is rendered
pub const PROJECT_PLACEHOLDER: &str = "{{project}}";

/// Name used in descriptions when the project name is blank
pub const UNTITLED_PROJECT: &str = "untitled project";

/// Recipe for a single generated task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBlueprint {
    pub submodule: Submodule,
    pub priority: Priority,
    pub assigned_to: &'static str,
    pub description: &'static str,
}

impl TaskBlueprint {
    /// Render the description with the project name substituted
    ///
    /// # Example
    /// ```
    /// use project_planner::planning::templates::library;
    ///
    /// let template = library::e_commerce();
    /// let description = template.blueprints[0].render("Shop");
    ///
    /// assert!(description.contains("Shop"));
    /// assert!(!description.contains("{{project}}"));
    /// ```
    pub fn render(&self, project_name: &str) -> String {
        let name = project_name.trim();
        let name = if name.is_empty() { UNTITLED_PROJECT } else { name };
        self.description.replace(PROJECT_PLACEHOLDER, name)
    }
}

/// Full set of blueprints for one project template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTemplate {
    pub template: Template,
    pub version: &'static str,
    pub blueprints: Vec<TaskBlueprint>,
}

pub mod library {
    use super::{TaskBlueprint, TaskTemplate};
    use crate::domain::project::{Priority, Submodule, Template};

    /// Catalog entry for a template
    pub fn for_template(template: Template) -> TaskTemplate {
        match template {
            Template::ECommerce => e_commerce(),
            Template::Ai => ai(),
            Template::Other => other(),
        }
    }

    pub fn e_commerce() -> TaskTemplate {
        TaskTemplate {
            template: Template::ECommerce,
            version: "1.0.0",
            blueprints: vec![
                TaskBlueprint {
                    submodule: Submodule::Setup,
                    priority: Priority::High,
                    assigned_to: "Developer",
                    description: "Set up the {{project}} storefront repository and tooling",
                },
                TaskBlueprint {
                    submodule: Submodule::Frontend,
                    priority: Priority::Medium,
                    assigned_to: "Developer",
                    description: "Build the product catalog and cart pages for {{project}}",
                },
                TaskBlueprint {
                    submodule: Submodule::Backend,
                    priority: Priority::High,
                    assigned_to: "Researcher",
                    description: "Implement order and payment endpoints for {{project}}",
                },
                TaskBlueprint {
                    submodule: Submodule::Database,
                    priority: Priority::Medium,
                    assigned_to: "Developer",
                    description: "Design the product, customer and order schema for {{project}}",
                },
                TaskBlueprint {
                    submodule: Submodule::Testing,
                    priority: Priority::Low,
                    assigned_to: "Tester",
                    description: "Write checkout end-to-end tests for {{project}}",
                },
            ],
        }
    }

    pub fn ai() -> TaskTemplate {
        TaskTemplate {
            template: Template::Ai,
            version: "1.0.0",
            blueprints: vec![
                TaskBlueprint {
                    submodule: Submodule::Setup,
                    priority: Priority::High,
                    assigned_to: "Developer",
                    description: "Set up the {{project}} training environment and dependencies",
                },
                TaskBlueprint {
                    submodule: Submodule::Frontend,
                    priority: Priority::Low,
                    assigned_to: "Developer",
                    description: "Build a results dashboard for {{project}}",
                },
                TaskBlueprint {
                    submodule: Submodule::Backend,
                    priority: Priority::High,
                    assigned_to: "Researcher",
                    description: "Implement the model training and inference pipeline for {{project}}",
                },
                TaskBlueprint {
                    submodule: Submodule::Database,
                    priority: Priority::Medium,
                    assigned_to: "Researcher",
                    description: "Collect and version the {{project}} datasets",
                },
                TaskBlueprint {
                    submodule: Submodule::Testing,
                    priority: Priority::Medium,
                    assigned_to: "Tester",
                    description: "Evaluate {{project}} model accuracy against a held-out set",
                },
            ],
        }
    }

    pub fn other() -> TaskTemplate {
        TaskTemplate {
            template: Template::Other,
            version: "1.0.0",
            blueprints: vec![
                TaskBlueprint {
                    submodule: Submodule::Setup,
                    priority: Priority::High,
                    assigned_to: "Developer",
                    description: "Set up the {{project}} repository",
                },
                TaskBlueprint {
                    submodule: Submodule::Frontend,
                    priority: Priority::Medium,
                    assigned_to: "Developer",
                    description: "Build the {{project}} user interface",
                },
                TaskBlueprint {
                    submodule: Submodule::Backend,
                    priority: Priority::Medium,
                    assigned_to: "Developer",
                    description: "Implement the {{project}} core services",
                },
                TaskBlueprint {
                    submodule: Submodule::Database,
                    priority: Priority::Low,
                    assigned_to: "Researcher",
                    description: "Design the {{project}} data model",
                },
                TaskBlueprint {
                    submodule: Submodule::Testing,
                    priority: Priority::Medium,
                    assigned_to: "Bug Fixer",
                    description: "Write and triage the {{project}} test suite",
                },
            ],
        }
    }
}
