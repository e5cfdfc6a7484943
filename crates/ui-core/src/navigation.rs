// File: crates/ui-core/src/navigation.rs
// Summary: Keyboard focus moves across the calendar grid, skipping disabled days.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::dates::add_months;

/// Upper bound on how far a single keyboard move may search for an enabled day.
pub const MAX_NAVIGATION_SCAN_DAYS: u64 = 366;

/// Grid keyboard commands (arrows, Home/End, PageUp/PageDown).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMove {
    PreviousDay,
    NextDay,
    PreviousWeek,
    NextWeek,
    StartOfWeek,
    EndOfWeek,
    PreviousMonth,
    NextMonth,
}

fn step(d: NaiveDate, mv: FocusMove) -> Option<NaiveDate> {
    match mv {
        FocusMove::PreviousDay | FocusMove::EndOfWeek => d.checked_sub_days(Days::new(1)),
        FocusMove::NextDay | FocusMove::StartOfWeek => d.checked_add_days(Days::new(1)),
        FocusMove::PreviousWeek => d.checked_sub_days(Days::new(7)),
        FocusMove::NextWeek => d.checked_add_days(Days::new(7)),
        FocusMove::PreviousMonth => Some(add_months(d, -1)).filter(|n| *n != d),
        FocusMove::NextMonth => Some(add_months(d, 1)).filter(|n| *n != d),
    }
}

fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (a - b).num_days().unsigned_abs()
}

/// Offset of `d` from the first day of its week.
fn days_into_week(d: NaiveDate, week_start: Weekday) -> u64 {
    let day = d.weekday().num_days_from_monday();
    let start = week_start.num_days_from_monday();
    u64::from((day + 7 - start) % 7)
}

/// Resolve the date that should receive focus after `mv` is applied to `from`.
///
/// Repeatable moves keep stepping in their direction until an enabled day is
/// found or the search leaves a one-year window. Home/End land on the week's
/// first/last day and fall back inwards within the same week.
/// Returns `None` when nothing enabled is reachable.
pub fn move_focus<F>(from: NaiveDate, mv: FocusMove, week_start: Weekday, is_date_enabled: F) -> Option<NaiveDate>
where
    F: Fn(NaiveDate) -> bool,
{
    let (mut current, limit) = match mv {
        FocusMove::StartOfWeek => (from.checked_sub_days(Days::new(days_into_week(from, week_start)))?, 6),
        FocusMove::EndOfWeek => (from.checked_add_days(Days::new(6 - days_into_week(from, week_start)))?, 6),
        _ => (step(from, mv)?, MAX_NAVIGATION_SCAN_DAYS),
    };
    let anchor = current;
    let origin = if matches!(mv, FocusMove::StartOfWeek | FocusMove::EndOfWeek) { anchor } else { from };
    while !is_date_enabled(current) {
        current = step(current, mv)?;
        if days_between(current, origin) > limit {
            log::trace!("focus move {:?} from {} found no enabled day", mv, from);
            return None;
        }
    }
    Some(current)
}
