// Task planning modules
//
// This module turns a project template into draft tasks and hands those
// tasks to the agent roster once a project is confirmed.

pub mod assignment;
pub mod generator;
pub mod templates;

// Re-export main types
pub use assignment::assign_by_index;
pub use generator::TaskGenerator;
pub use templates::{TaskBlueprint, TaskTemplate};
