//! Load batches of salary requests from CSV

use super::data::FormData;
use crate::categories::SalaryCategory;
use crate::currency::Currency;
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row: `Salary,Experience,Growth,Years,Bonus`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Salary")]
    salary: f64,
    #[serde(rename = "Experience")]
    experience: i32,
    #[serde(rename = "Growth")]
    growth: f64,
    #[serde(rename = "Years")]
    years: i32,
    #[serde(rename = "Bonus", default)]
    bonus: Option<f64>,
}

impl CsvRow {
    fn into_form(self, currency: Currency, category: SalaryCategory) -> FormData {
        FormData {
            currency,
            category,
            current_salary: self.salary,
            experience_years: self.experience,
            annual_growth_pct: self.growth,
            projection_years: self.years,
            bonus_pct: self.bonus,
        }
    }
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(
    path: P,
    currency: Currency,
    category: SalaryCategory,
) -> Result<Vec<FormData>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader, currency, category)
}

/// Load requests from any reader (e.g., stdin, string buffer)
pub fn load_requests_from_reader<R: std::io::Read>(
    reader: R,
    currency: Currency,
    category: SalaryCategory,
) -> Result<Vec<FormData>> {
    collect_rows(Reader::from_reader(reader), currency, category)
}

fn collect_rows<R: std::io::Read>(
    mut reader: Reader<R>,
    currency: Currency,
    category: SalaryCategory,
) -> Result<Vec<FormData>> {
    let mut requests = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.into_form(currency, category));
    }

    log::debug!("Loaded {} salary requests", requests.len());
    Ok(requests)
}
