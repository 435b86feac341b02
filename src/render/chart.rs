//! Line chart of salary, bonus and total income per year
//!
//! `ChartSpec` is a renderer-neutral description that serializes to JSON for
//! an external charting front end. `render_ascii` draws the same data as a
//! terminal plot.

use crate::currency::{format_currency_short, Currency};
use crate::projection::{ProjectionResult, YearRecord};
use serde::{Deserialize, Serialize};

const PLOT_HEIGHT: usize = 12;
const COLUMN_WIDTH: usize = 6;

/// One line on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    /// Glyph used by the terminal plot
    pub marker: char,
    pub fill: bool,
    /// Values converted into the display currency
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Calendar years, one per record
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

impl ChartSpec {
    pub fn from_projection(result: &ProjectionResult, currency: Currency, start_year: i32) -> Self {
        let symbol = currency.symbol();
        let series = |name: &str, color: &str, marker: char, fill: bool, pick: fn(&YearRecord) -> f64| Series {
            label: format!("{} ({})", name, symbol),
            color: color.to_string(),
            marker,
            fill,
            data: result.records.iter().map(|r| currency.convert(pick(r))).collect(),
        };

        Self {
            title: "Salary growth projection".to_string(),
            x_label: "Year".to_string(),
            y_label: format!("Amount ({})", symbol),
            labels: result
                .records
                .iter()
                .map(|r| r.calendar_year(start_year).to_string())
                .collect(),
            datasets: vec![
                series("Salary", "#667eea", '*', true, |r| r.salary),
                series("Bonus", "#764ba2", '+', false, |r| r.bonus),
                series("Total income", "#48bb78", '#', false, |r| r.total_income),
            ],
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Draw the chart as a fixed-height text plot, one column per year
///
/// Axis ticks use the compact currency format. Later series overwrite
/// earlier ones where points coincide.
pub fn render_ascii(result: &ProjectionResult, currency: Currency, start_year: i32) -> String {
    let spec = ChartSpec::from_projection(result, currency, start_year);
    let columns = spec.labels.len();

    // Positions are taken in the base unit; conversion is a constant factor
    let base_series: [fn(&YearRecord) -> f64; 3] = [|r| r.salary, |r| r.bonus, |r| r.total_income];
    let (lo, hi) = result
        .records
        .iter()
        .flat_map(|r| base_series.iter().map(move |pick| pick(r)))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let (lo, hi) = if columns == 0 { (0.0, 0.0) } else { (lo, hi) };
    let span = if hi > lo { hi - lo } else { 1.0 };

    let mut grid = vec![vec![' '; columns * COLUMN_WIDTH]; PLOT_HEIGHT];
    for (series, pick) in spec.datasets.iter().zip(base_series) {
        for (col, record) in result.records.iter().enumerate() {
            let level = ((pick(record) - lo) / span * (PLOT_HEIGHT - 1) as f64).round() as usize;
            let row = PLOT_HEIGHT - 1 - level.min(PLOT_HEIGHT - 1);
            grid[row][col * COLUMN_WIDTH + COLUMN_WIDTH / 2] = series.marker;
        }
    }

    let top = format_currency_short(hi, currency);
    let mid = format_currency_short(lo + (hi - lo) / 2.0, currency);
    let bottom = format_currency_short(lo, currency);
    let axis_width = [&top, &mid, &bottom]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", spec.title, currency.code()));
    for (i, row) in grid.iter().enumerate() {
        let tick = match i {
            0 => top.as_str(),
            i if i == PLOT_HEIGHT / 2 => mid.as_str(),
            i if i == PLOT_HEIGHT - 1 => bottom.as_str(),
            _ => "",
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{:>width$} |{}\n", tick, line.trim_end(), width = axis_width));
    }

    out.push_str(&format!(
        "{:>width$} +{}\n",
        "",
        "-".repeat(columns * COLUMN_WIDTH),
        width = axis_width
    ));
    let years: String = spec
        .labels
        .iter()
        .map(|l| format!("{:^width$}", l, width = COLUMN_WIDTH))
        .collect();
    out.push_str(&format!("{:>width$}  {}\n", "", years.trim_end(), width = axis_width));

    let legend: Vec<String> = spec
        .datasets
        .iter()
        .map(|s| format!("{} {}", s.marker, s.label))
        .collect();
    out.push_str(&legend.join("   "));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProjectionInput;
    use crate::projection::calculate_salary_projection;
    use approx::assert_relative_eq;

    fn sample() -> ProjectionResult {
        calculate_salary_projection(&ProjectionInput::new(25_000.0, 0.08, 0.15, 5))
    }

    #[test]
    fn test_three_series_per_year() {
        let spec = ChartSpec::from_projection(&sample(), Currency::EUR, 2026);
        assert_eq!(spec.labels, vec!["2026", "2027", "2028", "2029", "2030", "2031"]);
        assert_eq!(spec.datasets.len(), 3);
        assert!(spec.datasets.iter().all(|s| s.data.len() == 6));
        assert_eq!(spec.datasets[0].label, "Salary (€)");
        assert_eq!(spec.y_label, "Amount (€)");
        assert_relative_eq!(spec.datasets[0].data[0], 625.0, max_relative = 1e-12);
        assert_relative_eq!(spec.datasets[2].data[0], 718.75, max_relative = 1e-12);
    }

    #[test]
    fn test_json_shape() {
        let json = ChartSpec::from_projection(&sample(), Currency::UAH, 2026)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["datasets"].as_array().unwrap().len(), 3);
        assert_eq!(value["labels"][0], "2026");
        assert_eq!(value["datasets"][1]["fill"], false);
    }

    #[test]
    fn test_ascii_layout() {
        let text = render_ascii(&sample(), Currency::UAH, 2026);
        let lines: Vec<&str> = text.lines().collect();
        // title, plot rows, axis, years, legend
        assert_eq!(lines.len(), 1 + PLOT_HEIGHT + 3);
        // highest point is the final total income
        assert!(lines[1].ends_with('#'));
        assert!(lines[1].contains("K ₴"));
        assert!(lines[PLOT_HEIGHT + 2].contains("2031"));
        assert!(lines.last().unwrap().contains("* Salary (₴)"));
    }

    #[test]
    fn test_ascii_flat_projection() {
        let flat = calculate_salary_projection(&ProjectionInput::new(500.0, 0.0, 0.0, 3));
        let text = render_ascii(&flat, Currency::UAH, 2026);
        assert!(text.contains("500 ₴"));
        assert!(text.contains("2029"));
    }
}
