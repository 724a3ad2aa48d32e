// Repository implementations
// Adapters that implement domain repository interfaces

pub mod in_memory_agent_registry;
pub mod in_memory_project_repository;
pub mod noop_folder_repository;

pub use in_memory_agent_registry::InMemoryAgentRegistry;
pub use in_memory_project_repository::InMemoryProjectRepository;
pub use noop_folder_repository::NoopFolderRepository;
