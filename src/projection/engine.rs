//! Core projection engine for yearly salary trajectories

use crate::input::ProjectionInput;
use super::records::{ProjectionResult, YearRecord};
use super::state::ProjectionState;

/// Project salary, bonus and total income for each year of the horizon
///
/// Emits `input.years + 1` records starting at the current year. Arithmetic is
/// plain `f64` with no intermediate rounding. The input is assumed validated.
pub fn calculate_salary_projection(input: &ProjectionInput) -> ProjectionResult {
    let mut result = ProjectionResult::new(*input);
    let mut state = ProjectionState::from_input(input);

    loop {
        result.add_record(calculate_year(input, &state));

        if state.year_index >= input.years {
            break;
        }
        state.advance_year(input.annual_growth_rate);
    }

    log::debug!(
        "Projected {} years from {:.2} at {:.4} growth",
        input.years, input.current_salary, input.annual_growth_rate
    );

    result
}

fn calculate_year(input: &ProjectionInput, state: &ProjectionState) -> YearRecord {
    let bonus = state.salary * input.bonus_rate;

    YearRecord {
        year_index: state.year_index,
        salary: state.salary,
        bonus,
        total_income: state.salary + bonus,
        growth_from_previous: state.growth_from_previous(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample_input() -> ProjectionInput {
        ProjectionInput::new(25_000.0, 0.08, 0.15, 5)
    }

    #[test]
    fn test_record_count() {
        for years in [0, 1, 5, 20] {
            let input = ProjectionInput::new(10_000.0, 0.05, 0.1, years);
            let result = calculate_salary_projection(&input);
            assert_eq!(result.records.len(), years as usize + 1);
            for (i, record) in result.records.iter().enumerate() {
                assert_eq!(record.year_index, i as u32);
            }
        }
    }

    #[test]
    fn test_zero_years_single_record() {
        let input = ProjectionInput::new(25_000.0, 0.08, 0.15, 0);
        let result = calculate_salary_projection(&input);

        assert_eq!(result.records.len(), 1);
        let record = result.records[0];
        assert_eq!(record.growth_from_previous, 0.0);
        assert_relative_eq!(record.total_income, 25_000.0 * 1.15, max_relative = 1e-12);
    }

    #[test]
    fn test_sample_projection() {
        let result = calculate_salary_projection(&sample_input());
        let first = result.records[0];

        assert_relative_eq!(first.salary, 25_000.0);
        assert_relative_eq!(first.bonus, 3_750.0, max_relative = 1e-12);
        assert_relative_eq!(first.total_income, 28_750.0, max_relative = 1e-12);
        assert_eq!(first.growth_from_previous, 0.0);

        assert_relative_eq!(result.records[1].salary, 27_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            result.records[5].salary,
            25_000.0 * 1.08_f64.powi(5),
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(result.records[5].salary, 36_733.0, epsilon = 1.0);
    }

    #[test]
    fn test_recurrence_and_growth() {
        let input = ProjectionInput::new(18_500.0, 0.065, 0.2, 20);
        let records = calculate_salary_projection(&input).records;

        for pair in records.windows(2) {
            let (prev, cur) = (pair[0], pair[1]);
            assert_relative_eq!(cur.salary, prev.salary * 1.065, max_relative = 1e-12);
            assert_relative_eq!(
                cur.growth_from_previous,
                (cur.salary - prev.salary) / prev.salary * 100.0,
                max_relative = 1e-12
            );
            assert_relative_eq!(cur.growth_from_previous, 6.5, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_total_income_and_bonus_sum() {
        let input = ProjectionInput::new(40_000.0, 0.03, 0.12, 10);
        let result = calculate_salary_projection(&input);

        for record in &result.records {
            assert_relative_eq!(record.total_income, record.salary * 1.12, max_relative = 1e-12);
        }

        let bonus_sum: f64 = result.records.iter().map(|r| r.bonus).sum();
        let expected: f64 = result.records.iter().map(|r| r.salary * 0.12).sum();
        assert_relative_eq!(bonus_sum, expected, max_relative = 1e-12);
        assert_relative_eq!(result.summary().total_bonus, bonus_sum, max_relative = 1e-12);
    }

    #[test]
    fn test_monotonicity() {
        let rising = calculate_salary_projection(&ProjectionInput::new(9_000.0, 0.01, 0.0, 20));
        assert!(rising.records.windows(2).all(|w| w[1].salary > w[0].salary));

        let flat = calculate_salary_projection(&ProjectionInput::new(9_000.0, 0.0, 0.0, 20));
        assert!(flat.records.iter().all(|r| r.salary == 9_000.0));
        assert!(flat.records.iter().all(|r| r.growth_from_previous == 0.0));
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_salary_projection(&sample_input());
        let b = calculate_salary_projection(&sample_input());
        assert_eq!(a, b);
        for (x, y) in a.records.iter().zip(&b.records) {
            assert_eq!(x.salary.to_bits(), y.salary.to_bits());
        }
    }

    #[test]
    fn test_summary() {
        let summary = calculate_salary_projection(&sample_input()).summary();
        assert_relative_eq!(summary.current_salary, 25_000.0);
        assert_relative_eq!(
            summary.total_growth_pct,
            (1.08_f64.powi(5) - 1.0) * 100.0,
            max_relative = 1e-9
        );
    }
}
