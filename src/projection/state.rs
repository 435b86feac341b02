//! Running state while stepping through the projection years

use crate::input::ProjectionInput;

/// Salary position at one point of the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current year index (0 = current year)
    pub year_index: u32,

    /// Salary for the current year
    pub salary: f64,

    /// Salary for the previous year; `None` at year 0
    pub prior_salary: Option<f64>,
}

impl ProjectionState {
    /// Initialize state at the current year
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            year_index: 0,
            salary: input.current_salary,
            prior_salary: None,
        }
    }

    /// Step one year forward, compounding the salary
    pub fn advance_year(&mut self, annual_growth_rate: f64) {
        self.prior_salary = Some(self.salary);
        self.salary *= 1.0 + annual_growth_rate;
        self.year_index += 1;
    }

    /// Percent change against the prior year, 0 at year 0
    pub fn growth_from_previous(&self) -> f64 {
        match self.prior_salary {
            Some(prior) => (self.salary - prior) / prior * 100.0,
            None => 0.0,
        }
    }
}
