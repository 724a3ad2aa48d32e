// Project domain module
// Contains the project aggregate root, its tasks, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod project;
pub mod task;
pub mod value_objects;

// Re-export main types for convenience
pub use events::ProjectEvent;
pub use project::Project;
pub use task::Task;
pub use value_objects::{Priority, ProjectId, Submodule, TaskId, Template};
