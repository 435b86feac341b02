//! Printable HTML report mirroring the results section

use super::table::{table_rows, TABLE_HEADERS};
use crate::currency::{format_currency, Currency};
use crate::projection::ProjectionResult;

const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
table { width: 100%; border-collapse: collapse; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
.card { border: 1px solid #ddd; padding: 15px; margin: 10px 0; }
.positive { color: #2f855a; }";

/// Standalone HTML document with summary cards and the projection table
pub fn render_print_document(result: &ProjectionResult, currency: Currency, start_year: i32) -> String {
    let summary = result.summary();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Salary projection</title>\n<style>\n{}\n</style>\n", PRINT_STYLE));
    html.push_str("</head>\n<body>\n<h1>Salary projection</h1>\n");

    let cards = [
        ("Current salary", format_currency(summary.current_salary, currency)),
        ("Projected salary", format_currency(summary.projected_salary, currency)),
        ("Total growth", format!("{:.1}%", summary.total_growth_pct)),
        ("Total bonus", format_currency(summary.total_bonus, currency)),
    ];
    for (title, value) in cards {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3><p>{}</p></div>\n",
            title,
            escape_html(&value)
        ));
    }

    html.push_str("<table>\n<thead><tr>");
    for header in TABLE_HEADERS {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (row, record) in table_rows(result, currency, start_year).iter().zip(&result.records) {
        let growth_class = if record.growth_from_previous > 0.0 { " class=\"positive\"" } else { "" };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><strong>{}</strong></td><td{}>{}</td></tr>\n",
            row.year,
            escape_html(&row.salary),
            escape_html(&row.bonus),
            escape_html(&row.total_income),
            growth_class,
            row.growth
        ));
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
