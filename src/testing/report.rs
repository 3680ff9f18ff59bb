//! Run report: per-scenario results and the summary printed at the end

use colored::Colorize;
use serde::Serialize;

use crate::common::Result;

use super::outcome::{OutcomeKind, ScenarioOutcome};

/// Result of one scenario within a run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// 1-based position in the suite
    pub order: usize,
    pub name: &'static str,
    pub outcome: ScenarioOutcome,
    pub elapsed_ms: u64,
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub base_url: String,
    pub results: Vec<ScenarioResult>,
}

impl RunReport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    fn count(&self, kind: OutcomeKind) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.kind() == kind)
            .count()
    }

    pub fn passed(&self) -> usize {
        self.count(OutcomeKind::Pass)
    }

    pub fn failed(&self) -> usize {
        self.count(OutcomeKind::Fail)
    }

    pub fn skipped(&self) -> usize {
        self.count(OutcomeKind::Skipped)
    }

    /// True when every scenario passed
    pub fn success(&self) -> bool {
        !self.results.is_empty() && self.failed() == 0 && self.skipped() == 0
    }

    /// Outcome kinds in execution order, for comparing two runs
    pub fn shape(&self) -> Vec<OutcomeKind> {
        self.results.iter().map(|r| r.outcome.kind()).collect()
    }

    /// Outcome of a scenario by name
    pub fn outcome(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the closing summary line
    pub fn print_summary(&self) {
        let line = format!(
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        );
        if self.success() {
            println!("\n{} {}\n", "✓".green().bold(), line.green().bold());
        } else if self.failed() > 0 {
            println!("\n{} {}\n", "✗".red().bold(), line.red().bold());
        } else {
            println!("\n{} {}\n", "?".yellow().bold(), line.yellow().bold());
        }
    }
}

/// Print one finished scenario
pub fn print_result(result: &ScenarioResult) {
    let label = format!("{}. {}", result.order, result.name);
    match &result.outcome {
        ScenarioOutcome::Pass => {
            println!(
                "  {} {} {}",
                "✓".green(),
                label,
                format!("({} ms)", result.elapsed_ms).dimmed()
            );
        }
        ScenarioOutcome::Fail { reason } => {
            println!("  {} {}", "✗".red(), label);
            println!("      {}", reason.red());
        }
        ScenarioOutcome::Skipped { reason } => {
            println!("  {} {} {}", "-".yellow(), label, "(skipped)".yellow());
            println!("      {}", reason.dimmed());
        }
    }
}
