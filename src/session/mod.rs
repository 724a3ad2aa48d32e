// Session module
// Contains the project draft state machine and the session object that
// wires the draft to the agent registry and project store

#![allow(clippy::module_inception)]

pub mod draft;
pub mod review;
pub mod session;

// Re-export main types for convenience
pub use draft::{DraftPhase, ProjectDraft};
pub use review::TaskReview;
pub use session::{ProjectSession, SessionSnapshot};
