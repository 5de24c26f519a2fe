//! Net Worth Projection - deterministic year-by-year projection of household finances
//!
//! This library provides:
//! - Account model for savings, investment, real estate and debt positions
//! - Compound growth with monthly contributions, loan amortization, inflation deflation
//! - Yearly aggregation into assets, debts, net worth and category subtotals
//! - Batch runs of one account snapshot under many settings

pub mod account;
pub mod projection;
pub mod scenario;
pub mod settings;

// Re-export commonly used types
pub use account::{Account, AccountType, AccountBook};
pub use projection::{project, ProjectionEngine, ProjectionConfig, ProjectionError, ProjectionResult, YearlyProjection};
pub use scenario::ScenarioRunner;
pub use settings::ProjectionSettings;
