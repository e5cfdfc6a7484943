// File: crates/ui-core/src/lib.rs
// Summary: Core library entry point; calendar focus resolution and chart series scaling.

pub mod calendar;
pub mod dates;
pub mod locale;
pub mod navigation;
pub mod data;
pub mod series;
pub mod scale;
pub mod scaled;
pub mod palette;
pub mod types;
pub mod error;

pub use calendar::{
    resolve_base_date, resolve_focus_candidate, CalendarEvent, CalendarOptions, DateFocusController, FocusCommand,
    FocusState,
};
pub use navigation::{move_focus, FocusMove};
pub use data::ChartDataType;
pub use series::{assign_colors, ChartSeries, Datum, Series};
pub use scale::{BandScale, NumericScale, TimeScale, ValueScale, XScale};
pub use scaled::{make_scaled_series, nearest_point, ScaledPoint};
pub use palette::{Color, Palette};
pub use types::{Insets, PlotLayout};
pub use error::{CalendarError, ChartError};
