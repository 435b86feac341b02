//! Input validation run before the engine is invoked
//!
//! Every rejection is terminal for the submission: nothing is computed and the
//! caller reports the error message to the user.

use super::data::{FormData, ProjectionInput};
use crate::error::{Result, SalaryError};

pub const MAX_EXPERIENCE_YEARS: i32 = 50;
pub const MAX_GROWTH_PCT: f64 = 100.0;
pub const MIN_PROJECTION_YEARS: i32 = 1;
pub const MAX_PROJECTION_YEARS: i32 = 20;

pub trait Validate {
    fn validate(&self) -> Result<ProjectionInput>;
}

impl Validate for FormData {
    fn validate(&self) -> Result<ProjectionInput> {
        validate_form(self)
    }
}

/// Check the form and convert it into engine input
pub fn validate_form(data: &FormData) -> Result<ProjectionInput> {
    require_finite("current_salary", data.current_salary)?;
    require_finite("annual_growth_pct", data.annual_growth_pct)?;
    let bonus_pct = data.bonus_pct.unwrap_or(0.0);
    require_finite("bonus_pct", bonus_pct)?;

    if data.current_salary <= 0.0 {
        return Err(SalaryError::InvalidSalary(data.current_salary));
    }

    if !(0..=MAX_EXPERIENCE_YEARS).contains(&data.experience_years) {
        return Err(SalaryError::InvalidExperience(data.experience_years));
    }

    if !(0.0..=MAX_GROWTH_PCT).contains(&data.annual_growth_pct) {
        return Err(SalaryError::InvalidGrowth(data.annual_growth_pct));
    }

    if !(MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS).contains(&data.projection_years) {
        return Err(SalaryError::InvalidProjectionYears(data.projection_years));
    }

    if bonus_pct < 0.0 {
        return Err(SalaryError::InvalidBonus(bonus_pct));
    }

    log::debug!(
        "Validated input: salary={} growth={}% bonus={}% years={}",
        data.current_salary, data.annual_growth_pct, bonus_pct, data.projection_years
    );

    Ok(ProjectionInput {
        current_salary: data.current_salary,
        annual_growth_rate: data.annual_growth_pct / 100.0,
        bonus_rate: bonus_pct / 100.0,
        years: data.projection_years as u32,
    })
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SalaryError::NonFiniteField { field })
    }
}
