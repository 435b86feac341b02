//! Projection output structures

use crate::input::ProjectionInput;
use serde::{Deserialize, Serialize};

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Offset from the current year (0-indexed)
    pub year_index: u32,

    pub salary: f64,
    pub bonus: f64,

    /// salary + bonus
    pub total_income: f64,

    /// Percent change in salary against the prior record; 0 for year 0
    pub growth_from_previous: f64,
}

impl YearRecord {
    /// Calendar year this record falls in, given the year of index 0
    pub fn calendar_year(&self, start_year: i32) -> i32 {
        start_year + self.year_index as i32
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Input the projection was computed from
    pub input: ProjectionInput,

    /// One record per year, `input.years + 1` in total
    pub records: Vec<YearRecord>,
}

impl ProjectionResult {
    pub fn new(input: ProjectionInput) -> Self {
        Self {
            input,
            records: Vec::with_capacity(input.years as usize + 1),
        }
    }

    pub fn add_record(&mut self, record: YearRecord) {
        self.records.push(record);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let current_salary = self.records.first().map(|r| r.salary).unwrap_or(0.0);
        let projected_salary = self.records.last().map(|r| r.salary).unwrap_or(0.0);

        let total_growth_pct = if current_salary > 0.0 {
            (projected_salary - current_salary) / current_salary * 100.0
        } else {
            0.0
        };

        ProjectionSummary {
            current_salary,
            projected_salary,
            total_growth_pct,
            total_bonus: self.records.iter().map(|r| r.bonus).sum(),
            total_income: self.records.iter().map(|r| r.total_income).sum(),
        }
    }
}

/// Headline figures shown above the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub current_salary: f64,
    pub projected_salary: f64,
    pub total_growth_pct: f64,
    pub total_bonus: f64,
    pub total_income: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_year() {
        let record = YearRecord {
            year_index: 3,
            salary: 1.0,
            bonus: 0.0,
            total_income: 1.0,
            growth_from_previous: 0.0,
        };
        assert_eq!(record.calendar_year(2026), 2029);
    }

    #[test]
    fn test_empty_summary() {
        let result = ProjectionResult::new(ProjectionInput::new(1.0, 0.0, 0.0, 0));
        let summary = result.summary();
        assert_eq!(summary.total_growth_pct, 0.0);
        assert_eq!(summary.total_bonus, 0.0);
    }
}
