//! Project Planner Library
//!
//! This library provides the in-memory core of a project planning tool:
//! a fixed agent roster, a template-driven task generator, and a session
//! that turns a draft into a confirmed project and hands its tasks to the
//! agents.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod planning;
pub mod session;
pub mod telemetry;
