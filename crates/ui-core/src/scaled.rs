// File: crates/ui-core/src/scaled.rs
// Summary: Flatten mixed chart series into x-ordered, pixel-space points for hover and navigation.

use std::collections::HashSet;

use crate::data::ChartDataType;
use crate::palette::Color;
use crate::scale::{NumericScale, XScale};
use crate::series::{ChartSeries, Datum, Series};

/// A series point in pixel space.
///
/// `x` is NaN for a threshold drawn without any positioned series; such a
/// point stands for a full-width line rather than a navigable position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledPoint<'a, X> {
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub datum: Option<Datum<X>>,
    pub series: &'a Series<X>,
}

impl<X> ScaledPoint<'_, X> {
    pub fn is_positioned(&self) -> bool {
        !self.x.is_nan()
    }
}

/// Distinct x values of all line/bar data and x-thresholds, in first-seen order.
pub fn collect_all_x<X: ChartDataType>(series: &[ChartSeries<X>]) -> Vec<X> {
    let mut seen = HashSet::new();
    let mut all_x = Vec::new();
    let mut add = |x: &X| {
        if seen.insert(x.key()) {
            all_x.push(x.clone());
        }
    };
    for s in series {
        match &s.series {
            Series::Line { data, .. } | Series::Bar { data, .. } => data.iter().for_each(|d| add(&d.x)),
            Series::XThreshold { x, .. } => add(x),
            Series::Threshold { .. } => {}
        }
    }
    all_x
}

// Missing or NaN scale output lands on the axis origin.
#[inline]
fn or_zero(px: Option<f32>) -> f32 {
    px.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Scale line, threshold and x-threshold series into one list sorted by `x`.
///
/// Bars contribute x positions for thresholds but no points of their own.
/// Thresholds are repeated at every known x so they can be hovered in each
/// column. Ties in `x` keep input order.
pub fn make_scaled_series<'a, X, XS, YS>(series: &'a [ChartSeries<X>], x_scale: &XS, y_scale: &YS) -> Vec<ScaledPoint<'a, X>>
where
    X: ChartDataType,
    XS: XScale<X> + ?Sized,
    YS: NumericScale + ?Sized,
{
    let x_offset = match x_scale.bandwidth() {
        Some(bw) => (bw - 1.0).max(0.0) / 2.0,
        None => 0.0,
    };
    let scale_x = |x: &X| or_zero(x_scale.to_px(x)) + x_offset;
    let scale_y = |y: f64| or_zero(Some(y_scale.to_px(y)));
    let all_x = collect_all_x(series);

    let mut points = Vec::new();
    for ChartSeries { series: s, color } in series {
        match s {
            Series::Line { data, .. } => {
                for d in data {
                    points.push(ScaledPoint { x: scale_x(&d.x), y: scale_y(d.y), color: *color, datum: Some(d.clone()), series: s });
                }
            }
            Series::Threshold { y, .. } => {
                for x in &all_x {
                    points.push(ScaledPoint {
                        x: scale_x(x),
                        y: scale_y(*y),
                        color: *color,
                        datum: Some(Datum { x: x.clone(), y: *y }),
                        series: s,
                    });
                }
                if all_x.is_empty() {
                    points.push(ScaledPoint { x: f32::NAN, y: scale_y(*y), color: *color, datum: None, series: s });
                }
            }
            Series::XThreshold { x, .. } => {
                points.push(ScaledPoint {
                    x: scale_x(x),
                    y: scale_y(0.0),
                    color: *color,
                    datum: Some(Datum { x: x.clone(), y: 0.0 }),
                    series: s,
                });
            }
            // drawn and navigated by the bar layer
            Series::Bar { .. } => {}
        }
    }

    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    log::debug!("scaled {} series into {} points ({} distinct x)", series.len(), points.len(), all_x.len());
    points
}

/// Index of the positioned point whose `x` is closest to `px`; first wins on ties.
pub fn nearest_point<X>(points: &[ScaledPoint<'_, X>], px: f32) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_positioned())
        .fold(None, |best: Option<(usize, f32)>, (i, p)| {
            let dist = (p.x - px).abs();
            match best {
                Some((_, d)) if d <= dist => best,
                _ => Some((i, dist)),
            }
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ValueScale;

    #[test]
    fn all_x_is_unique_in_first_seen_order() {
        let c = Color::from_rgb(0, 0, 0);
        let series = vec![
            ChartSeries::new(Series::line("a", vec![(3.0, 1.0), (1.0, 1.0)]), c),
            ChartSeries::new(Series::threshold("t", 2.0), c),
            ChartSeries::new(Series::bar("b", vec![(1.0, 5.0), (2.0, 5.0)]), c),
            ChartSeries::new(Series::x_threshold("x", -0.0), c),
            ChartSeries::new(Series::x_threshold("x0", 0.0), c),
        ];
        assert_eq!(collect_all_x(&series), vec![3.0, 1.0, 2.0, -0.0]);
    }

    #[test]
    fn nearest_point_skips_unpositioned() {
        let c = Color::from_rgb(0, 0, 0);
        let series = vec![ChartSeries::new(Series::line("a", vec![(0.0, 1.0), (10.0, 1.0)]), c)];
        let xs = ValueScale::new_linear(0.0, 100.0, 0.0, 10.0);
        let ys = ValueScale::new_linear(0.0, 100.0, 0.0, 10.0);
        let points = make_scaled_series(&series, &xs, &ys);
        assert_eq!(nearest_point(&points, 80.0), Some(1));
        assert_eq!(nearest_point(&points, 50.0), Some(0));

        let lone = vec![ChartSeries::new(Series::<f64>::threshold("t", 1.0), c)];
        let points = make_scaled_series(&lone, &xs, &ys);
        assert_eq!(nearest_point(&points, 0.0), None);
    }
}
