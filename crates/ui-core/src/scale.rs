// File: crates/ui-core/src/scale.rs
// Summary: Axis scales mapping domain values (numbers, dates, categories) to pixels.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::data::ChartDataType;
use crate::error::ChartError;

/// Value coordinate (e.g., a measurement on the y axis).
pub type Value = f64;

/// Scale usable on the x axis for domain values of type `X`.
pub trait XScale<X> {
    /// Pixel position of `x`, or `None` when `x` is outside a categorical domain.
    fn to_px(&self, x: &X) -> Option<f32>;

    /// Band width in pixels for categorical scales; `None` for continuous ones.
    fn bandwidth(&self) -> Option<f32> {
        None
    }

    fn is_categorical(&self) -> bool {
        self.bandwidth().is_some()
    }
}

/// Scale usable on the y axis.
pub trait NumericScale {
    fn to_px(&self, y: Value) -> f32;
}

/// Continuous numeric scale mapping [vmin, vmax] onto [range_start, range_end].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub range_start: f32,
    pub range_end: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

fn check_finite(v: f64) -> Result<f64, ChartError> {
    if v.is_finite() { Ok(v) } else { Err(ChartError::NonFiniteDomain(v)) }
}

impl ValueScale {
    /// Linear scale; a degenerate domain is widened to one unit.
    pub fn new_linear(range_start: f32, range_end: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { range_start, range_end, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 }
    }

    pub fn try_linear(range_start: f32, range_end: f32, vmin: Value, vmax: Value) -> Result<Self, ChartError> {
        Ok(Self::new_linear(range_start, range_end, check_finite(vmin)?, check_finite(vmax)?))
    }

    /// Base-10 log scale over a strictly positive domain.
    pub fn try_log10(range_start: f32, range_end: f32, vmin: Value, vmax: Value) -> Result<Self, ChartError> {
        let (vmin, vmax) = (check_finite(vmin)?, check_finite(vmax)?);
        if vmin <= 0.0 || vmax <= 0.0 {
            return Err(ChartError::NonPositiveLogDomain { min: vmin, max: vmax });
        }
        let vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Ok(Self { range_start, range_end, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() })
    }

    /// Vertical scale with `vmin` at the bottom edge and `vmax` at the top.
    pub fn vertical(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        Self::new_linear(bottom_px, top_px, vmin, vmax)
    }

    fn fraction(&self, v: Value) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin).max(1e-12)
        }
    }

    #[inline]
    pub fn map(&self, v: Value) -> f32 {
        let (r0, r1) = (self.range_start as f64, self.range_end as f64);
        (r0 + self.fraction(v) * (r1 - r0)) as f32
    }

    /// Drag the content by `d_px` screen pixels (positive moves towards larger pixel values).
    pub fn pan_px(&mut self, d_px: f32) {
        let r = (self.range_end - self.range_start) as f64;
        if r.abs() < 1e-12 || !d_px.is_finite() {
            return;
        }
        let frac = d_px as f64 / r;
        if self.log {
            // pan in log domain
            let delta = (self.log_max - self.log_min) * frac;
            self.log_min -= delta;
            self.log_max -= delta;
            self.vmin = 10f64.powf(self.log_min);
            self.vmax = 10f64.powf(self.log_max);
        } else {
            let delta = (self.vmax - self.vmin) * frac;
            self.vmin -= delta;
            self.vmax -= delta;
        }
    }

    /// Zoom around `center`; `factor` > 1 zooms in. Non-positive factors are ignored.
    pub fn zoom_center(&mut self, center: Value, factor: f32) {
        if !(factor.is_finite() && factor > 0.0) || !center.is_finite() {
            return;
        }
        if self.log {
            let c = center.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            let new_span = (span / factor as f64).max(1e-9);
            self.log_min = c - new_span * 0.5;
            self.log_max = c + new_span * 0.5;
            self.vmin = 10f64.powf(self.log_min);
            self.vmax = 10f64.powf(self.log_max);
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            let new_span = (span / factor as f64).max(1e-9);
            self.vmin = center - new_span * 0.5;
            self.vmax = center + new_span * 0.5;
        }
    }

    /// Domain value at pixel `px`.
    pub fn invert(&self, px: f32) -> Value {
        let r = self.range_end - self.range_start;
        let t = if r.abs() < 1e-12 { 0.0 } else { ((px - self.range_start) / r) as f64 };
        if self.log {
            10f64.powf(self.log_min + t * (self.log_max - self.log_min))
        } else {
            self.vmin + t * (self.vmax - self.vmin)
        }
    }
}

impl NumericScale for ValueScale {
    fn to_px(&self, y: Value) -> f32 { self.map(y) }
}

impl XScale<f64> for ValueScale {
    fn to_px(&self, x: &f64) -> Option<f32> { Some(self.map(*x)) }
}

/// Continuous time scale; dates are placed by their offset from the domain start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    inner: ValueScale,
    origin: NaiveDateTime,
}

impl TimeScale {
    pub fn new(range_start: f32, range_end: f32, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let span = (end - start).num_milliseconds() as f64 / 1000.0;
        Self { inner: ValueScale::new_linear(range_start, range_end, 0.0, span), origin: start }
    }

    pub fn from_dates(range_start: f32, range_end: f32, start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(range_start, range_end, start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN))
    }

    fn seconds(&self, t: NaiveDateTime) -> f64 {
        (t - self.origin).num_milliseconds() as f64 / 1000.0
    }
}

impl XScale<NaiveDateTime> for TimeScale {
    fn to_px(&self, x: &NaiveDateTime) -> Option<f32> { Some(self.inner.map(self.seconds(*x))) }
}

impl XScale<NaiveDate> for TimeScale {
    fn to_px(&self, x: &NaiveDate) -> Option<f32> {
        Some(self.inner.map(self.seconds(x.and_time(NaiveTime::MIN))))
    }
}

/// Categorical scale dividing a pixel range into equal bands.
#[derive(Clone, Debug)]
pub struct BandScale<X: ChartDataType> {
    index: HashMap<X::Key, usize>,
    start: f32,
    step: f32,
    band_width: f32,
}

impl<X: ChartDataType> BandScale<X> {
    /// `padding_inner` and `padding_outer` are fractions of a step, in [0, 1].
    pub fn new(
        domain: &[X],
        range_start: f32,
        range_end: f32,
        padding_inner: f32,
        padding_outer: f32,
    ) -> Result<Self, ChartError> {
        if domain.is_empty() {
            return Err(ChartError::EmptyDomain);
        }
        for p in [padding_inner, padding_outer] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ChartError::InvalidPadding(p));
            }
        }
        let mut index = HashMap::with_capacity(domain.len());
        for (i, x) in domain.iter().enumerate() {
            if index.insert(x.key(), i).is_some() {
                return Err(ChartError::DuplicateCategory(i));
            }
        }
        let count = domain.len() as f32;
        let span = range_end - range_start;
        let step = span / (count - padding_inner + 2.0 * padding_outer).max(1e-6);
        Ok(Self {
            index,
            start: range_start + step * padding_outer,
            step,
            band_width: step * (1.0 - padding_inner),
        })
    }

    pub fn len(&self) -> usize { self.index.len() }
    pub fn is_empty(&self) -> bool { self.index.is_empty() }
    pub fn step(&self) -> f32 { self.step }
}

impl<X: ChartDataType> XScale<X> for BandScale<X> {
    fn to_px(&self, x: &X) -> Option<f32> {
        self.index.get(&x.key()).map(|&i| self.start + self.step * i as f32)
    }

    fn bandwidth(&self) -> Option<f32> {
        Some(self.band_width)
    }
}
