// File: crates/ui-core/src/series.rs
// Summary: Series model for mixed line/bar charts with y and x thresholds.

use crate::palette::{Color, Palette};

/// One data point of a line or bar series.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum<X> {
    pub x: X,
    pub y: f64,
}

impl<X> Datum<X> {
    pub fn new(x: X, y: f64) -> Self { Self { x, y } }
}

/// Chart series. The variant set is closed; consumers match exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum Series<X> {
    Line { title: String, data: Vec<Datum<X>> },
    Bar { title: String, data: Vec<Datum<X>> },
    /// Horizontal line at `y` spanning the whole x range.
    Threshold { title: String, y: f64 },
    /// Vertical line at `x`.
    XThreshold { title: String, x: X },
}

impl<X> Series<X> {
    pub fn line(title: impl Into<String>, data: impl IntoIterator<Item = (X, f64)>) -> Self {
        Series::Line { title: title.into(), data: data.into_iter().map(|(x, y)| Datum { x, y }).collect() }
    }

    pub fn bar(title: impl Into<String>, data: impl IntoIterator<Item = (X, f64)>) -> Self {
        Series::Bar { title: title.into(), data: data.into_iter().map(|(x, y)| Datum { x, y }).collect() }
    }

    pub fn threshold(title: impl Into<String>, y: f64) -> Self {
        Series::Threshold { title: title.into(), y }
    }

    pub fn x_threshold(title: impl Into<String>, x: X) -> Self {
        Series::XThreshold { title: title.into(), x }
    }

    pub fn title(&self) -> &str {
        match self {
            Series::Line { title, .. }
            | Series::Bar { title, .. }
            | Series::Threshold { title, .. }
            | Series::XThreshold { title, .. } => title,
        }
    }

    /// Data points for line and bar series; empty for thresholds.
    pub fn data(&self) -> &[Datum<X>] {
        match self {
            Series::Line { data, .. } | Series::Bar { data, .. } => data,
            Series::Threshold { .. } | Series::XThreshold { .. } => &[],
        }
    }
}

/// A series paired with the colour it is drawn in.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries<X> {
    pub series: Series<X>,
    pub color: Color,
}

impl<X> ChartSeries<X> {
    pub fn new(series: Series<X>, color: Color) -> Self { Self { series, color } }
}

/// Pair series with palette colours in order, cycling when the palette runs out.
pub fn assign_colors<X>(series: Vec<Series<X>>, palette: &Palette) -> Vec<ChartSeries<X>> {
    series
        .into_iter()
        .enumerate()
        .map(|(i, s)| ChartSeries { series: s, color: palette.color_at(i) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_have_no_data() {
        let t: Series<f64> = Series::threshold("limit", 3.0);
        assert!(t.data().is_empty());
        assert_eq!(t.title(), "limit");
        let l = Series::line("cpu", vec![(1.0, 2.0)]);
        assert_eq!(l.data(), &[Datum::new(1.0, 2.0)]);
    }

    #[test]
    fn colors_cycle_through_palette() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00"]).unwrap();
        let series = vec![
            Series::line("a", vec![(0.0, 1.0)]),
            Series::bar("b", vec![(0.0, 1.0)]),
            Series::threshold("c", 1.0),
        ];
        let colored = assign_colors(series, &palette);
        assert_eq!(colored[0].color, palette.color_at(0));
        assert_eq!(colored[1].color, palette.color_at(1));
        assert_eq!(colored[2].color, colored[0].color);
    }
}
