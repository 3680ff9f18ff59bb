//! Ordered Foody API scenario suite
//!
//! Scenarios share one authenticated session and one [`RunState`], and run
//! strictly in [`ORDERED`] order because later ones depend on ids produced
//! by earlier ones.

mod outcome;
mod report;
mod runner;
mod scenarios;
mod state;

pub use outcome::{OutcomeKind, ScenarioOutcome};
pub use report::{RunReport, ScenarioResult};
pub use runner::{run_scenarios, run_suite, RunOptions};
pub use scenarios::{
    Scenario, DELETE_NOT_FOUND, DELETE_SUCCESS, EDIT_NOT_FOUND, EDIT_SUCCESS, NONEXISTENT_FOOD_ID,
    ORDERED,
};
pub use state::RunState;
