//! Salary Projection - year-by-year income trajectories from growth assumptions
//!
//! This library provides:
//! - Input validation for salary, growth, bonus and horizon entries
//! - The projection engine compounding salary year over year
//! - Currency conversion and display formatting
//! - Table, chart, CSV and printable renderers
//! - Batch and multi-scenario runs

pub mod error;
pub mod currency;
pub mod categories;
pub mod input;
pub mod projection;
pub mod render;
pub mod scenario;

// Re-export commonly used types
pub use error::{Result, SalaryError};
pub use currency::{format_currency, format_currency_short, Currency};
pub use categories::{CategoryFit, SalaryCategory};
pub use input::{FormData, ProjectionInput, Validate};
pub use projection::{calculate_salary_projection, ProjectionResult, ProjectionSummary, YearRecord};
pub use scenario::ScenarioRunner;
