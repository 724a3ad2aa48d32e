// Infrastructure layer module
// Contains in-memory adapters for the domain ports
// Follows Hexagonal Architecture

pub mod repositories;
