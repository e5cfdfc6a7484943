// File: crates/ui-core/src/data.rs
// Summary: X-domain value types accepted by chart series (numbers, categories, dates).

use std::fmt::Debug;
use std::hash::Hash;

use chrono::{NaiveDate, NaiveDateTime};

/// A value that can sit on a chart's x axis.
///
/// `key` gives the identity used when collecting distinct x values: two values
/// with equal keys are the same column.
pub trait ChartDataType: Clone {
    type Key: Hash + Eq + Clone + Debug;
    fn key(&self) -> Self::Key;
}

impl ChartDataType for f64 {
    type Key = u64;
    fn key(&self) -> u64 {
        // -0.0 and 0.0 share a column; all NaNs share one
        if *self == 0.0 {
            0.0f64.to_bits()
        } else if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl ChartDataType for String {
    type Key = String;
    fn key(&self) -> String { self.clone() }
}

impl ChartDataType for &'static str {
    type Key = &'static str;
    fn key(&self) -> &'static str { *self }
}

impl ChartDataType for NaiveDate {
    type Key = NaiveDate;
    fn key(&self) -> NaiveDate { *self }
}

impl ChartDataType for NaiveDateTime {
    type Key = NaiveDateTime;
    fn key(&self) -> NaiveDateTime { *self }
}
