//! Projection engine for yearly net worth projections

mod engine;
mod error;
pub mod growth;
mod yearly;

pub use engine::{project, ProjectionEngine, ProjectionConfig, DEFAULT_HORIZON_YEARS, DEFAULT_INFLATION_RATE_PCT};
pub use error::ProjectionError;
pub use yearly::{YearlyProjection, ProjectionResult, ProjectionSummary};
