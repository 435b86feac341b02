//! Scenario runner for comparing growth assumptions
//!
//! Runs the projection once per growth rate over the same starting salary,
//! bonus and horizon.

use crate::input::ProjectionInput;
use crate::projection::{calculate_salary_projection, ProjectionResult};
use rayon::prelude::*;

/// Batch runner over a shared base input
///
/// # Example
/// ```
/// use salary_projection::{ProjectionInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(ProjectionInput::new(25_000.0, 0.08, 0.15, 5));
/// let results = runner.run_growth_scenarios(&[0.03, 0.05, 0.08]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ProjectionInput,
}

impl ScenarioRunner {
    pub fn new(base: ProjectionInput) -> Self {
        Self { base }
    }

    /// Run one projection per growth rate, results in the order of `rates`
    pub fn run_growth_scenarios(&self, rates: &[f64]) -> Vec<ProjectionResult> {
        rates
            .par_iter()
            .map(|&rate| calculate_salary_projection(&self.base.with_growth_rate(rate)))
            .collect()
    }

    /// Run each input independently, results in input order
    pub fn run_batch(inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
        inputs.par_iter().map(calculate_salary_projection).collect()
    }
}
