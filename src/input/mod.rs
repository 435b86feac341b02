//! Form entry, validation and request loading

mod data;
mod validation;
pub mod loader;

pub use data::{FormData, ProjectionInput};
pub use validation::{validate_form, Validate, MAX_PROJECTION_YEARS, MIN_PROJECTION_YEARS};
pub use loader::{load_requests, load_requests_from_reader};
