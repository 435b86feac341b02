//! Salary Projection CLI
//!
//! Command-line interface for projecting salary growth

use anyhow::{bail, Context};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use salary_projection::input::load_requests;
use salary_projection::render::{
    self, render_ascii, render_print_document, render_table, to_csv_string, ChartSpec,
};
use salary_projection::{
    calculate_salary_projection, format_currency, Currency, FormData, ProjectionInput,
    ProjectionResult, SalaryCategory, SalaryError, ScenarioRunner, Validate,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "salary-projection", version, about = "Project salary growth year by year")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate and render a single projection
    Project {
        #[command(flatten)]
        form: FormArgs,
        #[command(flatten)]
        display: DisplayArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also export the table to salary_projection.csv
        #[arg(long)]
        export_csv: bool,
    },
    /// Compare final outcomes across several growth rates
    Compare {
        #[command(flatten)]
        form: FormArgs,
        #[command(flatten)]
        display: DisplayArgs,
        /// Growth percentages to compare, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },
    /// Project every request in a CSV file (Salary,Experience,Growth,Years,Bonus)
    Batch {
        file: PathBuf,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// List typical salary ranges per category
    Categories {
        #[arg(long, default_value = "UAH", value_parser = parse_currency)]
        currency: Currency,
    },
}

#[derive(Debug, Args)]
struct FormArgs {
    /// Current salary, in hryvnia
    #[arg(long)]
    salary: Option<f64>,
    /// Years of experience in the field (0-50)
    #[arg(long)]
    experience: Option<i32>,
    /// Expected annual salary growth, percent (0-100)
    #[arg(long)]
    growth: Option<f64>,
    /// How many years ahead to project (1-20)
    #[arg(long)]
    years: Option<i32>,
    /// Bonus as a percentage of salary
    #[arg(long)]
    bonus: Option<f64>,
    /// Start from sample data; explicit flags override it
    #[arg(long)]
    sample: bool,
}

#[derive(Debug, Args)]
struct DisplayArgs {
    /// Display currency (UAH, EUR, USD)
    #[arg(long, default_value = "UAH", value_parser = parse_currency)]
    currency: Currency,
    /// Salary category for the typical-range check (minimum, average, high)
    #[arg(long, default_value = "average", value_parser = parse_category)]
    category: SalaryCategory,
    /// Calendar year of the first row (defaults to the current year)
    #[arg(long)]
    start_year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
    Chart,
    ChartJson,
    Print,
}

fn parse_currency(s: &str) -> Result<Currency, String> {
    s.parse::<Currency>().map_err(|e| e.to_string())
}

fn parse_category(s: &str) -> Result<SalaryCategory, String> {
    s.parse::<SalaryCategory>().map_err(|e| e.to_string())
}

impl FormArgs {
    fn to_form_data(&self, display: &DisplayArgs) -> anyhow::Result<FormData> {
        let base = if self.sample {
            FormData::sample()
        } else {
            FormData {
                currency: display.currency,
                category: display.category,
                current_salary: self.salary.context("--salary is required (or use --sample)")?,
                experience_years: 0,
                annual_growth_pct: self.growth.context("--growth is required (or use --sample)")?,
                projection_years: self.years.context("--years is required (or use --sample)")?,
                bonus_pct: None,
            }
        };

        Ok(FormData {
            currency: display.currency,
            category: display.category,
            current_salary: self.salary.unwrap_or(base.current_salary),
            experience_years: self.experience.unwrap_or(base.experience_years),
            annual_growth_pct: self.growth.unwrap_or(base.annual_growth_pct),
            projection_years: self.years.unwrap_or(base.projection_years),
            bonus_pct: self.bonus.or(base.bonus_pct),
        })
    }
}

impl DisplayArgs {
    fn start_year(&self) -> i32 {
        self.start_year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli.command) {
        let code = exit_code(&e);
        if code == EXIT_REJECTED {
            eprintln!("Invalid input: {:#}", e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(code);
    }
}

const EXIT_FAILED: i32 = 1;
const EXIT_REJECTED: i32 = 2;

/// Rejected user entry exits with 2, every other failure with 1
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SalaryError>() {
        Some(e) if e.is_validation() => EXIT_REJECTED,
        _ => EXIT_FAILED,
    }
}

/// Validate the base form and every compared rate; a missing `--growth`
/// falls back to the first rate
fn compare_inputs(
    form: FormArgs,
    display: &DisplayArgs,
    rates: &[f64],
) -> anyhow::Result<(FormData, ProjectionInput)> {
    let form = FormArgs { growth: form.growth.or(rates.first().copied()), ..form };
    let data = form.to_form_data(display)?;
    let input = data.validate()?;
    for &rate in rates {
        FormData { annual_growth_pct: rate, ..data.clone() }.validate()?;
    }
    Ok((data, input))
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Project { form, display, format, output, export_csv } => {
            let data = form.to_form_data(&display)?;
            let input = data.validate()?;
            data.category
                .check_salary(data.currency.convert(data.current_salary), data.currency);

            let result = calculate_salary_projection(&input);
            let start_year = display.start_year();
            let rendered = render_projection(&result, format, data.currency, start_year)?;

            if export_csv {
                render::export_csv(render::DEFAULT_EXPORT_FILE, &result, data.currency, start_year)?;
            }

            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("Wrote {:?} output to {}", format, path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Command::Compare { form, display, rates } => {
            let (data, input) = compare_inputs(form, &display, &rates)?;

            let fractions: Vec<f64> = rates.iter().map(|r| r / 100.0).collect();
            let results = ScenarioRunner::new(input).run_growth_scenarios(&fractions);

            println!(
                "{:>8} {:>16} {:>10} {:>16} {:>18}",
                "Growth", "Final salary", "Total", "Total bonus", "Total income"
            );
            for (rate, result) in rates.iter().zip(&results) {
                let summary = result.summary();
                println!(
                    "{:>7.1}% {:>16} {:>9.1}% {:>16} {:>18}",
                    rate,
                    format_currency(summary.projected_salary, data.currency),
                    summary.total_growth_pct,
                    format_currency(summary.total_bonus, data.currency),
                    format_currency(summary.total_income, data.currency),
                );
            }
        }
        Command::Batch { file, display } => {
            let requests = load_requests(&file, display.currency, display.category)
                .with_context(|| format!("loading {}", file.display()))?;

            let mut inputs = Vec::with_capacity(requests.len());
            let mut rows = Vec::with_capacity(requests.len());
            for (i, request) in requests.iter().enumerate() {
                match request.validate() {
                    Ok(input) => {
                        inputs.push(input);
                        rows.push(i + 1);
                    }
                    Err(e) => eprintln!("Row {}: {}", i + 1, e),
                }
            }
            if inputs.is_empty() && !requests.is_empty() {
                bail!("no valid requests in {}", file.display());
            }

            let results = ScenarioRunner::run_batch(&inputs);
            println!(
                "{:>4} {:>14} {:>8} {:>6} {:>16} {:>10} {:>14}",
                "Row", "Salary", "Growth", "Years", "Final salary", "Total", "Total bonus"
            );
            for (row, result) in rows.iter().zip(&results) {
                let summary = result.summary();
                println!(
                    "{:>4} {:>14} {:>7.1}% {:>6} {:>16} {:>9.1}% {:>14}",
                    row,
                    format_currency(summary.current_salary, display.currency),
                    result.input.annual_growth_rate * 100.0,
                    result.input.years,
                    format_currency(summary.projected_salary, display.currency),
                    summary.total_growth_pct,
                    format_currency(summary.total_bonus, display.currency),
                );
            }
        }
        Command::Categories { currency } => {
            println!("Typical monthly salaries in {} ({})", currency.name(), currency);
            for category in SalaryCategory::ALL {
                println!("{:<8} {:<16} {}", category.key(), category.name(), category.suggestion(currency));
            }
        }
    }

    Ok(())
}

fn render_projection(
    result: &ProjectionResult,
    format: OutputFormat,
    currency: Currency,
    start_year: i32,
) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Table => {
            let summary = result.summary();
            format!(
                "Current salary:   {}\nProjected salary: {}\nTotal growth:     {:.1}%\nTotal bonus:      {}\n\n{}",
                format_currency(summary.current_salary, currency),
                format_currency(summary.projected_salary, currency),
                summary.total_growth_pct,
                format_currency(summary.total_bonus, currency),
                render_table(result, currency, start_year),
            )
        }
        OutputFormat::Csv => to_csv_string(result, currency, start_year)?,
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "currency": currency,
                "start_year": start_year,
                "input": result.input,
                "summary": result.summary(),
                "records": result.records,
            });
            format!("{}\n", serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Chart => render_ascii(result, currency, start_year),
        OutputFormat::ChartJson => {
            format!("{}\n", ChartSpec::from_projection(result, currency, start_year).to_json()?)
        }
        OutputFormat::Print => render_print_document(result, currency, start_year),
    };

    log::debug!("Rendered {} rows as {:?}", result.records.len(), format);
    Ok(rendered)
}
