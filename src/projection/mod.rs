//! Projection engine for yearly salary trajectories

mod state;
mod engine;
mod records;

pub use state::ProjectionState;
pub use engine::calculate_salary_projection;
pub use records::{ProjectionResult, ProjectionSummary, YearRecord};
