//! Tabular view of a projection

use crate::currency::{format_currency, Currency};
use crate::projection::{ProjectionResult, YearRecord};

pub const TABLE_HEADERS: [&str; 5] = ["Year", "Salary", "Bonus", "Total income", "Growth"];

/// One displayed table row, all values already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub year: String,
    pub salary: String,
    pub bonus: String,
    pub total_income: String,
    pub growth: String,
}

impl TableRow {
    pub fn from_record(record: &YearRecord, currency: Currency, start_year: i32) -> Self {
        Self {
            year: record.calendar_year(start_year).to_string(),
            salary: format_currency(record.salary, currency),
            bonus: format_currency(record.bonus, currency),
            total_income: format_currency(record.total_income, currency),
            growth: format_growth(record.growth_from_previous),
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [
            self.year.as_str(),
            self.salary.as_str(),
            self.bonus.as_str(),
            self.total_income.as_str(),
            self.growth.as_str(),
        ]
    }
}

/// `+8.0%` for growth, `0.0%` for none, `-2.5%` for decline
pub fn format_growth(pct: f64) -> String {
    let sign = if pct > 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, pct)
}

/// Build display rows for every record
pub fn table_rows(result: &ProjectionResult, currency: Currency, start_year: i32) -> Vec<TableRow> {
    result
        .records
        .iter()
        .map(|r| TableRow::from_record(r, currency, start_year))
        .collect()
}

/// Render the projection as a right-aligned text table
pub fn render_table(result: &ProjectionResult, currency: Currency, start_year: i32) -> String {
    let rows = table_rows(result, currency, start_year);

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &TABLE_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, &row.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            // chars().count() so currency glyphs pad like one column
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", " ".repeat(pad), cell)
        })
        .collect();
    out.push_str(&padded.join(" | "));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProjectionInput;
    use crate::projection::calculate_salary_projection;

    fn sample() -> ProjectionResult {
        calculate_salary_projection(&ProjectionInput::new(25_000.0, 0.08, 0.15, 5))
    }

    #[test]
    fn test_growth_format() {
        assert_eq!(format_growth(0.0), "0.0%");
        assert_eq!(format_growth(8.0), "+8.0%");
        assert_eq!(format_growth(-2.46), "-2.5%");
    }

    #[test]
    fn test_rows() {
        let rows = table_rows(&sample(), Currency::UAH, 2026);
        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows[0],
            TableRow {
                year: "2026".into(),
                salary: "25,000 ₴".into(),
                bonus: "3,750 ₴".into(),
                total_income: "28,750 ₴".into(),
                growth: "0.0%".into(),
            }
        );
        assert_eq!(rows[1].year, "2027");
        assert_eq!(rows[1].salary, "27,000 ₴");
        assert_eq!(rows[1].growth, "+8.0%");
        assert_eq!(rows[5].salary, "36,733 ₴");
    }

    #[test]
    fn test_rows_in_other_currency() {
        let rows = table_rows(&sample(), Currency::EUR, 2026);
        assert_eq!(rows[0].salary, "625 €");
        assert_eq!(rows[0].total_income, "719 €");
    }

    #[test]
    fn test_rows_above_i64_range() {
        let input = crate::input::validate_form(&crate::FormData {
            current_salary: 1e13,
            annual_growth_pct: 100.0,
            projection_years: 20,
            ..crate::FormData::sample()
        })
        .unwrap();
        let rows = table_rows(&calculate_salary_projection(&input), Currency::UAH, 2026);

        assert_eq!(rows[20].salary, "10,485,760,000,000,000,000 ₴");
        assert_ne!(rows[19].salary, rows[20].salary);
    }

    #[test]
    fn test_render_alignment() {
        let text = render_table(&sample(), Currency::UAH, 2026);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 6);
        assert!(lines[0].trim_start().starts_with("Year"));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }
}
