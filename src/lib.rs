//! Foody API scenario suite
//!
//! Runs an ordered set of authenticated CRUD checks against a live Foody
//! service, sharing one session and the id of the created food between
//! scenarios.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use api::{Credentials, Session};
pub use common::{Error, Result};
pub use testing::{RunReport, Scenario, ScenarioOutcome};
