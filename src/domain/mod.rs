// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod agent;
pub mod errors;
pub mod project;
pub mod repositories;

pub use errors::{DomainError, DomainResult};
