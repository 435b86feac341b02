//! Raw form entry and the validated engine input

use crate::categories::SalaryCategory;
use crate::currency::Currency;
use serde::{Deserialize, Serialize};

/// Values as entered by the user, before validation
///
/// Monetary amounts are in the base unit; `currency` only selects how
/// results are displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormData {
    /// Display currency
    pub currency: Currency,

    /// Category used for the advisory range check
    pub category: SalaryCategory,

    /// Current monthly salary
    pub current_salary: f64,

    /// Years of experience (advisory, not used by the engine)
    pub experience_years: i32,

    /// Expected annual growth in percent
    pub annual_growth_pct: f64,

    /// Number of years to project
    pub projection_years: i32,

    /// Bonus as a percentage of salary; missing means no bonus
    pub bonus_pct: Option<f64>,
}

impl FormData {
    /// Demonstration values: 25,000 salary, 3 years experience, 8% growth,
    /// 5 year horizon, 15% bonus
    pub fn sample() -> Self {
        Self {
            currency: Currency::UAH,
            category: SalaryCategory::Average,
            current_salary: 25_000.0,
            experience_years: 3,
            annual_growth_pct: 8.0,
            projection_years: 5,
            bonus_pct: Some(15.0),
        }
    }
}

/// Validated engine input, with percentages converted to fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting salary in the base unit
    pub current_salary: f64,

    /// Year-over-year growth as a fraction (0.08 = 8%)
    pub annual_growth_rate: f64,

    /// Bonus as a fraction of salary
    pub bonus_rate: f64,

    /// Projection horizon; the engine emits `years + 1` records
    pub years: u32,
}

impl ProjectionInput {
    pub fn new(current_salary: f64, annual_growth_rate: f64, bonus_rate: f64, years: u32) -> Self {
        Self {
            current_salary,
            annual_growth_rate,
            bonus_rate,
            years,
        }
    }

    /// Copy of this input with a different growth rate
    pub fn with_growth_rate(&self, annual_growth_rate: f64) -> Self {
        Self {
            annual_growth_rate,
            ..*self
        }
    }
}
