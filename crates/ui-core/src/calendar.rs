// File: crates/ui-core/src/calendar.rs
// Summary: Date focus controller for a month calendar grid.
// Notes:
// - Focus state is owned by the caller and threaded through `apply`/`resolve`.
// - The controller never touches UI focus itself; it returns a `FocusCommand`
//   that the host executes after rendering.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::dates::{add_months, days_in_month, is_same_month, start_of_month};
use crate::locale::week_start_for_locale;
use crate::navigation::{move_focus, FocusMove};

/// Which grid day, if any, owns keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    NoFocus,
    Focused(NaiveDate),
}

impl FocusState {
    pub fn date(&self) -> Option<NaiveDate> {
        match *self {
            FocusState::NoFocus => None,
            FocusState::Focused(d) => Some(d),
        }
    }
}

/// Inputs from the host view that change focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarEvent {
    MonthChanged(NaiveDate),
    DateSelected(NaiveDate),
    DateFocusedByUser(NaiveDate),
    FocusMoved(FocusMove),
}

/// Instruction for the host after a resolution pass. Safe to execute repeatedly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusCommand {
    /// Move keyboard focus onto this day's interactive element.
    MoveFocusTo(NaiveDate),
    /// The grid has no focusable day; focus the calendar container instead.
    FocusContainer,
    None,
}

#[derive(Clone, Debug)]
pub struct CalendarOptions {
    pub locale: String,
    /// Explicit first weekday; derived from `locale` when unset.
    pub start_of_week: Option<Weekday>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self { locale: "en-US".to_string(), start_of_week: None }
    }
}

impl CalendarOptions {
    pub fn start_of_week(&self) -> Weekday {
        self.start_of_week.unwrap_or_else(|| week_start_for_locale(&self.locale))
    }
}

/// First enabled day of the month containing `month`.
///
/// Checks the first of the month, then scans forward one day at a time. The
/// predicate is called at most once per day of that month and never for days
/// outside it. `None` means no day in the grid is enabled.
pub fn resolve_base_date<F>(month: NaiveDate, is_date_enabled: F) -> Option<NaiveDate>
where
    F: Fn(NaiveDate) -> bool,
{
    let start = start_of_month(month);
    let found = (0..u64::from(days_in_month(start)))
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .find(|d| {
            let enabled = is_date_enabled(*d);
            log::trace!("base date scan {} enabled={}", d, enabled);
            enabled
        });
    if found.is_none() {
        log::debug!("no enabled day in {}-{:02}", start.year(), start.month());
    }
    found
}

/// Pick the day that should receive focus when nothing is focused.
///
/// Priority: the selection, then today, then `base_date`. The selection and
/// today only qualify when enabled and in the same month as `base_date`.
pub fn resolve_focus_candidate<F>(
    base_date: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    is_date_enabled: F,
) -> Option<NaiveDate>
where
    F: Fn(NaiveDate) -> bool,
{
    if let Some(sel) = selected {
        if is_date_enabled(sel) && is_same_month(sel, base_date) {
            return Some(sel);
        }
    }
    if is_date_enabled(today) && is_same_month(today, base_date) {
        return Some(today);
    }
    if is_date_enabled(base_date) {
        return Some(base_date);
    }
    None
}

/// Month calendar focus controller.
///
/// Holds the host's inputs (displayed month, selection, availability). The
/// `FocusState` itself stays with the caller.
pub struct DateFocusController<F> {
    displayed_month: NaiveDate,
    selected: Option<NaiveDate>,
    today: Option<NaiveDate>,
    is_date_enabled: F,
    options: CalendarOptions,
}

impl<F> DateFocusController<F>
where
    F: Fn(NaiveDate) -> bool,
{
    pub fn new(displayed_month: NaiveDate, is_date_enabled: F) -> Self {
        Self {
            displayed_month: start_of_month(displayed_month),
            selected: None,
            today: None,
            is_date_enabled,
            options: CalendarOptions::default(),
        }
    }

    pub fn with_selected(mut self, selected: Option<NaiveDate>) -> Self {
        self.selected = selected;
        self
    }

    /// Pin "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_options(mut self, options: CalendarOptions) -> Self {
        self.options = options;
        self
    }

    pub fn displayed_month(&self) -> NaiveDate { self.displayed_month }
    pub fn selected(&self) -> Option<NaiveDate> { self.selected }
    pub fn options(&self) -> &CalendarOptions { &self.options }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn base_date(&self) -> Option<NaiveDate> {
        resolve_base_date(self.displayed_month, &self.is_date_enabled)
    }

    pub fn focus_candidate(&self) -> Option<NaiveDate> {
        let base = self.base_date()?;
        resolve_focus_candidate(base, self.selected, self.today(), &self.is_date_enabled)
    }

    /// Event the header's previous/next buttons emit.
    pub fn month_step(&self, previous: bool) -> CalendarEvent {
        let anchor = self.base_date().unwrap_or(self.displayed_month);
        CalendarEvent::MonthChanged(add_months(anchor, if previous { -1 } else { 1 }))
    }

    /// Apply a host event to `state`, returning the next state.
    pub fn apply(&mut self, state: FocusState, event: CalendarEvent) -> FocusState {
        match event {
            CalendarEvent::MonthChanged(month) => {
                self.displayed_month = start_of_month(month);
                FocusState::NoFocus
            }
            CalendarEvent::DateSelected(date) => {
                self.selected = Some(date);
                FocusState::NoFocus
            }
            CalendarEvent::DateFocusedByUser(date) => FocusState::Focused(date),
            CalendarEvent::FocusMoved(mv) => {
                let Some(from) = state.date().or_else(|| self.focus_candidate()) else {
                    return state;
                };
                match move_focus(from, mv, self.options.start_of_week(), &self.is_date_enabled) {
                    Some(target) => {
                        if !is_same_month(target, self.displayed_month) {
                            self.displayed_month = start_of_month(target);
                        }
                        FocusState::Focused(target)
                    }
                    None => state,
                }
            }
        }
    }

    /// Fill in focus when there is none and tell the host where focus belongs.
    ///
    /// Focus on a day that is no longer enabled is dropped first, so it never
    /// survives a change in availability.
    pub fn resolve(&self, state: FocusState) -> (FocusState, FocusCommand) {
        let state = match state {
            FocusState::Focused(d) if !(self.is_date_enabled)(d) => {
                log::debug!("dropping focus on disabled day {}", d);
                FocusState::NoFocus
            }
            s => s,
        };
        let base = self.base_date();
        let state = match (state, base) {
            (FocusState::NoFocus, Some(base)) => {
                match resolve_focus_candidate(base, self.selected, self.today(), &self.is_date_enabled) {
                    Some(candidate) => FocusState::Focused(candidate),
                    None => FocusState::NoFocus,
                }
            }
            (s, _) => s,
        };
        let command = match state {
            FocusState::Focused(d) if is_same_month(d, self.displayed_month) => FocusCommand::MoveFocusTo(d),
            FocusState::Focused(_) => FocusCommand::None,
            FocusState::NoFocus => FocusCommand::FocusContainer,
        };
        log::debug!("calendar focus resolved to {:?} ({:?})", state, command);
        (state, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn base_date_is_first_enabled_day() {
        assert_eq!(resolve_base_date(ymd(2024, 3, 20), |_| true), Some(ymd(2024, 3, 1)));
        assert_eq!(resolve_base_date(ymd(2024, 3, 20), |d| d.day() >= 4), Some(ymd(2024, 3, 4)));
        assert_eq!(resolve_base_date(ymd(2024, 3, 20), |_| false), None);
    }

    #[test]
    fn header_step_moves_one_month() {
        let ctl = DateFocusController::new(ymd(2024, 3, 1), |_| true);
        assert_eq!(ctl.month_step(true), CalendarEvent::MonthChanged(ymd(2024, 2, 1)));
        assert_eq!(ctl.month_step(false), CalendarEvent::MonthChanged(ymd(2024, 4, 1)));
    }

    #[test]
    fn options_derive_week_start_from_locale() {
        let mut o = CalendarOptions::default();
        assert_eq!(o.start_of_week(), Weekday::Sun);
        o.locale = "de-DE".into();
        assert_eq!(o.start_of_week(), Weekday::Mon);
        o.start_of_week = Some(Weekday::Sat);
        assert_eq!(o.start_of_week(), Weekday::Sat);
    }
}
