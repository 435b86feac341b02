//! Error types for validation, parsing and export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalaryError {
    #[error("Please enter a valid salary (got {0})")]
    InvalidSalary(f64),

    #[error("Years of experience must be between 0 and 50 (got {0})")]
    InvalidExperience(i32),

    #[error("Annual growth must be between 0 and 100% (got {0}%)")]
    InvalidGrowth(f64),

    #[error("Projection years must be between 1 and 20 (got {0})")]
    InvalidProjectionYears(i32),

    #[error("Bonus percentage cannot be negative (got {0}%)")]
    InvalidBonus(f64),

    #[error("Field '{field}' must be a finite number")]
    NonFiniteField { field: &'static str },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown salary category: {0}")]
    UnknownCategory(String),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SalaryError {
    /// True for rejections of user entry, as opposed to I/O or encoding failures
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SalaryError::InvalidSalary(_)
                | SalaryError::InvalidExperience(_)
                | SalaryError::InvalidGrowth(_)
                | SalaryError::InvalidProjectionYears(_)
                | SalaryError::InvalidBonus(_)
                | SalaryError::NonFiniteField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SalaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(SalaryError::InvalidSalary(0.0).is_validation());
        assert!(SalaryError::NonFiniteField { field: "salary" }.is_validation());
        assert!(!SalaryError::UnknownCurrency("GBP".into()).is_validation());
    }

    #[test]
    fn test_messages_name_the_bounds() {
        let msg = SalaryError::InvalidProjectionYears(21).to_string();
        assert_eq!(msg, "Projection years must be between 1 and 20 (got 21)");
    }
}
