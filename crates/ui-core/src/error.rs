// File: crates/ui-core/src/error.rs
// Summary: Error types for scale construction, colour parsing, and calendar dates.

use thiserror::Error;

/// Errors raised while building chart scales or palettes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("scale domain is empty")]
    EmptyDomain,
    #[error("scale domain bound is not finite: {0}")]
    NonFiniteDomain(f64),
    #[error("log scale domain must be strictly positive, got [{min}, {max}]")]
    NonPositiveLogDomain { min: f64, max: f64 },
    #[error("band padding must lie in [0, 1], got {0}")]
    InvalidPadding(f32),
    #[error("duplicate category at index {0}")]
    DuplicateCategory(usize),
    #[error("invalid colour literal '{0}'")]
    InvalidColor(String),
    #[error("palette has no colours")]
    EmptyPalette,
}

/// Errors raised while constructing calendar months.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid calendar month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid month literal '{0}', expected YYYY-MM")]
    InvalidMonthLiteral(String),
}
