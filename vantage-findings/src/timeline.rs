//! SLA timeline classifier — buckets finding lifecycle dates into the
//! calendar-day cells of a 6-week month grid.
//!
//! Three event kinds, evaluated independently per finding: created on its
//! creation day, sla-approaching a fixed number of days before its due date,
//! and sla-breached on the due date itself while the finding is still open.
//! A breach fires exactly once, on the due date — "due today" and "overdue"
//! are conflated into that single breach-day event rather than a persistent
//! daily state, which is what the dashboards have always shown.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use vantage_core::{parse_iso_date, FindingRecord, Severity, DEFAULT_APPROACHING_WINDOW_DAYS};

/// 6 weeks × 7 days, Sunday-first.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlaEventKind { Created, SlaApproaching, SlaBreached }

/// Console palette tag for a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor { Red, Amber, Blue, Gray }

/// Created events color by the finding's severity; breach and approaching
/// events use fixed colors regardless of severity.
pub fn severity_color(severity: Severity) -> EventColor {
    match severity {
        Severity::Critical => EventColor::Red,
        Severity::High => EventColor::Amber,
        Severity::Medium => EventColor::Blue,
        Severity::Low => EventColor::Gray,
    }
}

const BREACH_COLOR: EventColor = EventColor::Red;
const APPROACHING_COLOR: EventColor = EventColor::Amber;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaEvent {
    pub kind: SlaEventKind,
    pub title: String,
    pub color: EventColor,
    pub record: FindingRecord,
}

/// One cell of the month grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub events: Vec<SlaEvent>,
}

impl CalendarDay {
    /// Cells with events are selectable in the day-detail view; empty cells
    /// are non-interactive.
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// The calendar classifier. The approaching window is a policy value, not a
/// constant of the logic.
#[derive(Debug, Clone, Copy)]
pub struct SlaCalendar {
    approaching_window_days: u32,
}

impl Default for SlaCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_APPROACHING_WINDOW_DAYS)
    }
}

impl SlaCalendar {
    pub fn new(approaching_window_days: u32) -> Self {
        Self { approaching_window_days }
    }

    pub fn approaching_window_days(&self) -> u32 {
        self.approaching_window_days
    }

    /// All events falling on one calendar day. A single finding contributes
    /// 0–3 events across different days; a finding with no due date or a
    /// terminal status contributes no SLA events at all.
    pub fn classify_day(
        &self,
        records: &[FindingRecord],
        day: NaiveDate,
        is_terminal: &dyn Fn(&str) -> bool,
    ) -> Vec<SlaEvent> {
        let mut events = Vec::new();
        for record in records {
            if parse_iso_date(&record.created_date) == Some(day) {
                events.push(SlaEvent {
                    kind: SlaEventKind::Created,
                    title: format!("{} created", record.key),
                    color: severity_color(record.severity),
                    record: record.clone(),
                });
            }

            if is_terminal(&record.status) {
                continue;
            }
            let Some(due) = record.due_date.as_deref().and_then(parse_iso_date) else {
                continue;
            };

            if due == day {
                events.push(SlaEvent {
                    kind: SlaEventKind::SlaBreached,
                    title: format!("{} SLA breached", record.key),
                    color: BREACH_COLOR,
                    record: record.clone(),
                });
            }
            if due - Duration::days(self.approaching_window_days as i64) == day {
                events.push(SlaEvent {
                    kind: SlaEventKind::SlaApproaching,
                    title: format!(
                        "{} due in {} days",
                        record.key, self.approaching_window_days
                    ),
                    color: APPROACHING_COLOR,
                    record: record.clone(),
                });
            }
        }
        events
    }

    /// Build the 42-cell grid for the month containing `anchor`, Sunday-first,
    /// padded with trailing/leading days of the adjacent months. Pure for a
    /// fixed `records` + `anchor` + `today`.
    pub fn build_month(
        &self,
        records: &[FindingRecord],
        anchor: NaiveDate,
        today: NaiveDate,
        is_terminal: &dyn Fn(&str) -> bool,
    ) -> Vec<CalendarDay> {
        let first = anchor.with_day(1).unwrap_or(anchor);
        let offset = first.weekday().num_days_from_sunday() as i64;
        let start = first - Duration::days(offset);

        (0..GRID_CELLS as i64)
            .map(|i| {
                let date = start + Duration::days(i);
                CalendarDay {
                    date,
                    in_current_month: date.year() == anchor.year() && date.month() == anchor.month(),
                    is_today: date == today,
                    events: self.classify_day(records, date, is_terminal),
                }
            })
            .collect()
    }
}

/// One calendar month back, clamped at month-end (Mar 31 → Feb 28/29).
pub fn prev_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_sub_months(Months::new(1)).unwrap_or(anchor)
}

/// One calendar month forward, clamped at month-end (Jan 31 → Feb 28/29).
/// Never a fixed 30-day shift.
pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    anchor.checked_add_months(Months::new(1)).unwrap_or(anchor)
}
