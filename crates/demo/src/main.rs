// File: crates/demo/src/main.rs
// Summary: Demo loads a series CSV, prints its scaled points, then walks calendar focus for a month.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use std::path::Path;
use ui_core::dates::parse_month;
use ui_core::{
    assign_colors, make_scaled_series, CalendarEvent, Datum, DateFocusController, FocusMove, FocusState, Palette,
    PlotLayout, Series, ValueScale,
};

fn main() -> Result<()> {
    env_logger::init();

    // Usage: ui-demo [series.csv] [YYYY-MM]
    let mut args = std::env::args().skip(1);
    let csv_path = args.next().filter(|a| a != "-");
    let month = match args.next() {
        Some(m) => parse_month(&m).with_context(|| format!("bad month argument '{m}'"))?,
        None => chrono::Local::now().date_naive().with_day(1).context("first of month")?,
    };

    let series = match &csv_path {
        Some(p) => load_series_csv(Path::new(p)).with_context(|| format!("failed to load CSV '{p}'"))?,
        None => sample_series(),
    };
    if series.is_empty() {
        anyhow::bail!("no series loaded; expected columns series,kind,x,y");
    }
    println!("Loaded {} series", series.len());

    print_scaled(series);
    walk_calendar(month);
    Ok(())
}

fn print_scaled(series: Vec<Series<f64>>) {
    let chart = assign_colors(series, &Palette::default());
    let (x_min, x_max) = x_extent(&chart.iter().map(|c| &c.series).collect::<Vec<_>>());
    let (y_min, y_max) = y_extent(&chart.iter().map(|c| &c.series).collect::<Vec<_>>());

    let layout = PlotLayout::default();
    let (left, right) = layout.x_range();
    let (bottom, top) = layout.y_range();
    let xs = ValueScale::new_linear(left, right, x_min, x_max);
    let ys = ValueScale::new_linear(bottom, top, y_min, y_max);

    for p in make_scaled_series(&chart, &xs, &ys) {
        let datum = p.datum.map(|d| format!("({}, {})", d.x, d.y)).unwrap_or_else(|| "-".into());
        println!("{:>9.2} {:>9.2}  {}  {:<16} {}", p.x, p.y, p.color, p.series.title(), datum);
    }
}

fn walk_calendar(month: NaiveDate) {
    let weekdays = |d: NaiveDate| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun);
    let mut ctl = DateFocusController::new(month, weekdays);
    println!("Calendar {}-{:02} (weekends disabled)", month.year(), month.month());

    let (state, cmd) = ctl.resolve(FocusState::NoFocus);
    println!("  initial focus: {:?} -> {:?}", state, cmd);

    let state = ctl.apply(state, CalendarEvent::FocusMoved(FocusMove::NextWeek));
    let (state, cmd) = ctl.resolve(state);
    println!("  next week:     {:?} -> {:?}", state, cmd);

    let event = ctl.month_step(false);
    let state = ctl.apply(state, event);
    let (state, cmd) = ctl.resolve(state);
    println!("  next month:    {:?} -> {:?}", state, cmd);

    if let Some(d) = state.date() {
        let state = ctl.apply(state, CalendarEvent::DateSelected(d));
        let (state, cmd) = ctl.resolve(state);
        println!("  selected {d}: {:?} -> {:?}", state, cmd);
    }
}

fn x_extent(series: &[&Series<f64>]) -> (f64, f64) {
    let xs = series.iter().flat_map(|s| match s {
        Series::XThreshold { x, .. } => vec![*x],
        other => other.data().iter().map(|d| d.x).collect(),
    });
    min_max(xs)
}

fn y_extent(series: &[&Series<f64>]) -> (f64, f64) {
    let ys = series.iter().flat_map(|s| match s {
        Series::Threshold { y, .. } => vec![*y, 0.0],
        Series::XThreshold { .. } => vec![0.0],
        other => other.data().iter().map(|d| d.y).collect(),
    });
    min_max(ys)
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() && hi.is_finite() { (lo, hi) } else { (0.0, 1.0) }
}

fn sample_series() -> Vec<Series<f64>> {
    vec![
        Series::line("requests", (0..8).map(|i| (i as f64, 40.0 + (i as f64 * 0.9).sin() * 25.0))),
        Series::bar("errors", (0..8).map(|i| (i as f64, (i % 3) as f64 * 4.0))),
        Series::threshold("budget", 60.0),
        Series::x_threshold("deploy", 5.0),
    ]
}

/// Load a long-format CSV (`series,kind,x,y`) into series, in order of first appearance.
fn load_series_csv(path: &Path) -> Result<Vec<Series<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let col = |name: &str| headers.iter().position(|h| h == name).with_context(|| format!("missing column '{name}'"));
    let (i_series, i_kind, i_x, i_y) = (col("series")?, col("kind")?, col("x")?, col("y")?);

    let mut out: Vec<Series<f64>> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("");
        let num = |i: usize| -> Option<f64> { field(i).parse::<f64>().ok() };
        let title = field(i_series).to_string();
        let kind = field(i_kind).to_lowercase();

        let point = || num(i_x).zip(num(i_y)).with_context(|| format!("row {}: x/y not numeric", row + 1));

        match (kind.as_str(), out.iter().position(|s| s.title() == title)) {
            ("line" | "bar", Some(i)) => {
                let (x, y) = point()?;
                match &mut out[i] {
                    Series::Line { data, .. } if kind == "line" => data.push(Datum::new(x, y)),
                    Series::Bar { data, .. } if kind == "bar" => data.push(Datum::new(x, y)),
                    _ => log::warn!("row {}: series '{}' is not a {} series", row + 1, title, kind),
                }
            }
            ("line", None) => out.push(Series::line(title, [point()?])),
            ("bar", None) => out.push(Series::bar(title, [point()?])),
            ("threshold", None) => {
                let y = num(i_y).with_context(|| format!("row {}: threshold needs y", row + 1))?;
                out.push(Series::threshold(title, y));
            }
            ("x-threshold", None) => {
                let x = num(i_x).with_context(|| format!("row {}: x-threshold needs x", row + 1))?;
                out.push(Series::x_threshold(title, x));
            }
            (other, _) => log::warn!("row {}: skipping kind '{}' for series '{}'", row + 1, other, title),
        }
    }
    Ok(out)
}
