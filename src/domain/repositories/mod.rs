// Domain ports implemented by the infrastructure layer

pub mod agent_registry;
pub mod folder_repository;
pub mod project_repository;

pub use agent_registry::AgentRegistry;
pub use folder_repository::FolderRepository;
pub use project_repository::ProjectRepository;
