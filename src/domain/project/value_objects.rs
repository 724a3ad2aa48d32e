use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a confirmed project
///
/// Backed by a UUIDv7, so ids are timestamp-ordered and two projects created
/// in the same millisecond still get distinct identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generates a fresh timestamp-derived id
    pub fn generate() -> Self {
        ProjectId(Uuid::now_v7())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        ProjectId(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a task, unique within one generated batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    /// Id for the task at `index` (0-based) in generation order
    ///
    /// # Example
    /// ```
    /// use project_planner::domain::project::TaskId;
    ///
    /// assert_eq!(TaskId::sequential(0).as_str(), "task-1");
    /// ```
    pub fn sequential(index: usize) -> Self {
        TaskId(format!("task-{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Project area a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Submodule {
    Setup,
    Frontend,
    Backend,
    Database,
    Testing,
}

impl Submodule {
    /// Every submodule, in the order projects list them
    pub const ALL: [Submodule; 5] = [
        Submodule::Setup,
        Submodule::Frontend,
        Submodule::Backend,
        Submodule::Database,
        Submodule::Testing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Submodule::Setup => "Setup",
            Submodule::Frontend => "Frontend",
            Submodule::Backend => "Backend",
            Submodule::Database => "Database",
            Submodule::Testing => "Testing",
        }
    }
}

impl fmt::Display for Submodule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Project template offered by the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Template {
    #[serde(rename = "e-commerce")]
    ECommerce,
    #[serde(rename = "ai")]
    Ai,
    #[serde(rename = "other")]
    Other,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::ECommerce, Template::Ai, Template::Other];

    /// Parses a form value
    ///
    /// Blank input means no template was selected. Any other unrecognised
    /// value is treated as [`Template::Other`].
    ///
    /// # Example
    /// ```
    /// use project_planner::domain::project::Template;
    ///
    /// assert_eq!(Template::parse("e-commerce"), Some(Template::ECommerce));
    /// assert_eq!(Template::parse("  "), None);
    /// assert_eq!(Template::parse("game"), Some(Template::Other));
    /// ```
    pub fn parse(value: &str) -> Option<Template> {
        match value.trim() {
            "" => None,
            "e-commerce" => Some(Template::ECommerce),
            "ai" => Some(Template::Ai),
            _ => Some(Template::Other),
        }
    }

    /// Value submitted by the form
    pub fn value(&self) -> &'static str {
        match self {
            Template::ECommerce => "e-commerce",
            Template::Ai => "ai",
            Template::Other => "other",
        }
    }

    /// Human label shown next to the value
    pub fn label(&self) -> &'static str {
        match self {
            Template::ECommerce => "E-commerce",
            Template::Ai => "AI/Machine Learning",
            Template::Other => "Other",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.value())
    }
}
