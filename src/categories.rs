//! Typical salary ranges used to suggest and sanity-check entered salaries

use crate::currency::Currency;
use crate::error::{Result, SalaryError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Salary category with a typical range in the base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SalaryCategory {
    /// Entry level, intern
    Minimum,
    /// Experienced specialist
    #[default]
    Average,
    /// Senior specialist, manager
    High,
}

/// Where a salary falls relative to a category's range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFit {
    Below,
    Within,
    Above,
}

impl SalaryCategory {
    pub const ALL: [SalaryCategory; 3] = [
        SalaryCategory::Minimum,
        SalaryCategory::Average,
        SalaryCategory::High,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SalaryCategory::Minimum => "minimum",
            SalaryCategory::Average => "average",
            SalaryCategory::High => "high",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SalaryCategory::Minimum => "Minimum salary",
            SalaryCategory::Average => "Average salary",
            SalaryCategory::High => "High salary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SalaryCategory::Minimum => "Entry level, intern",
            SalaryCategory::Average => "Experienced specialist",
            SalaryCategory::High => "Senior specialist, manager",
        }
    }

    /// (min, max) in the base unit
    pub fn base_range(&self) -> (f64, f64) {
        match self {
            SalaryCategory::Minimum => (6_000.0, 12_000.0),
            SalaryCategory::Average => (15_000.0, 35_000.0),
            SalaryCategory::High => (40_000.0, 100_000.0),
        }
    }

    /// Range converted into `currency` and rounded for display
    pub fn range_in(&self, currency: Currency) -> (i64, i64) {
        let (min, max) = self.base_range();
        (
            currency.convert(min).round() as i64,
            currency.convert(max).round() as i64,
        )
    }

    /// Input hint, e.g. "Experienced specialist (15000 - 35000 ₴)"
    pub fn suggestion(&self, currency: Currency) -> String {
        let (min, max) = self.range_in(currency);
        format!("{} ({} - {} {})", self.description(), min, max, currency.symbol())
    }

    /// Compare a salary expressed in `currency` against the unrounded converted range
    pub fn check_salary(&self, salary: f64, currency: Currency) -> CategoryFit {
        let (min, max) = self.base_range();
        let (min, max) = (currency.convert(min), currency.convert(max));

        let fit = if salary < min {
            CategoryFit::Below
        } else if salary > max {
            CategoryFit::Above
        } else {
            CategoryFit::Within
        };

        match fit {
            CategoryFit::Below => log::warn!(
                "Salary {} is below the {} range (min {} {})",
                salary, self.key(), min, currency.symbol()
            ),
            CategoryFit::Above => log::warn!(
                "Salary {} is above the {} range (max {} {})",
                salary, self.key(), max, currency.symbol()
            ),
            CategoryFit::Within => {}
        }

        fit
    }
}

impl FromStr for SalaryCategory {
    type Err = SalaryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimum" | "min" => Ok(SalaryCategory::Minimum),
            "average" | "avg" => Ok(SalaryCategory::Average),
            "high" => Ok(SalaryCategory::High),
            _ => Err(SalaryError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_conversion() {
        assert_eq!(SalaryCategory::Average.range_in(Currency::UAH), (15_000, 35_000));
        assert_eq!(SalaryCategory::Average.range_in(Currency::EUR), (375, 875));
        assert_eq!(SalaryCategory::Minimum.range_in(Currency::USD), (162, 324));
    }

    #[test]
    fn test_suggestion_text() {
        assert_eq!(
            SalaryCategory::High.suggestion(Currency::EUR),
            "Senior specialist, manager (1000 - 2500 €)"
        );
    }

    #[test]
    fn test_check_salary_bounds_inclusive() {
        let cat = SalaryCategory::Average;
        assert_eq!(cat.check_salary(15_000.0, Currency::UAH), CategoryFit::Within);
        assert_eq!(cat.check_salary(35_000.0, Currency::UAH), CategoryFit::Within);
        assert_eq!(cat.check_salary(14_999.0, Currency::UAH), CategoryFit::Below);
        assert_eq!(cat.check_salary(35_001.0, Currency::UAH), CategoryFit::Above);
    }

    #[test]
    fn test_check_salary_in_foreign_currency() {
        // 400 EUR sits inside 375..875
        assert_eq!(
            SalaryCategory::Average.check_salary(400.0, Currency::EUR),
            CategoryFit::Within
        );
        assert_eq!(
            SalaryCategory::Average.check_salary(25_000.0, Currency::EUR),
            CategoryFit::Above
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("High".parse::<SalaryCategory>().unwrap(), SalaryCategory::High);
        assert!("huge".parse::<SalaryCategory>().is_err());
    }
}
