//! Open/closed evaluation of weekly store schedules.
//!
//! Evaluation is a pure function of the schedule and the evaluation instant.
//! Rules are checked in order and the first match wins:
//!
//! 1. temporary closure
//! 2. open around the clock
//! 3. today's posted hours, falling back to the next opening time

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use chrono_tz::Tz;

use super::schedule::{Day, WeeklySchedule};
use super::time::TimeOfDay;

const TEMPORARILY_CLOSED: &str = "Temporarily Closed";
const OPEN_24_7: &str = "Open 24/7";

/// Open/closed state of a store at a given instant, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AvailabilityStatus {
    pub is_open: bool,
    pub status_text: String,
    pub next_change_text: Option<String>,
}

impl AvailabilityStatus {
    fn open(status_text: impl Into<String>, next_change_text: Option<String>) -> Self {
        Self {
            is_open: true,
            status_text: status_text.into(),
            next_change_text,
        }
    }

    fn closed(status_text: impl Into<String>, next_change_text: Option<String>) -> Self {
        Self {
            is_open: false,
            status_text: status_text.into(),
            next_change_text,
        }
    }
}

/// Evaluates the schedule at `now`, a local date and time in whatever
/// timezone the caller considers authoritative.
pub fn is_store_open(schedule: &WeeklySchedule, now: NaiveDateTime) -> AvailabilityStatus {
    if schedule.temporary_closure {
        tracing::trace!("store temporarily closed");
        let message = schedule
            .closure_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(TEMPORARILY_CLOSED);
        return AvailabilityStatus::closed(message, None);
    }

    if schedule.is_24x7 {
        return AvailabilityStatus::open(OPEN_24_7, None);
    }

    let today = Day::from(now.weekday());
    let time = TimeOfDay::from_time(&now.time());

    let Some((open, close)) = schedule.day(today).window() else {
        tracing::trace!("no hours posted for {}", today);
        return AvailabilityStatus::closed("Closed Today", None);
    };

    if open <= time && time <= close {
        return AvailabilityStatus::open(
            format!("Open until {}", close.to_12h()),
            Some(format!("Closes at {}", close.to_12h())),
        );
    }

    // Closed right now, look for the next opening.
    let (label, next_open) = if time > close {
        let tomorrow = today.next();
        (tomorrow.to_string(), schedule.day(tomorrow).open)
    } else {
        ("today".to_string(), Some(open))
    };

    match next_open {
        Some(next_open) => AvailabilityStatus::closed(
            format!("Closed - Opens {} at {}", label, next_open.to_12h()),
            Some(format!("Opens {} at {}", label, next_open.to_12h())),
        ),
        None => AvailabilityStatus::closed("Closed", None),
    }
}

/// Human-readable weekly hours, Monday first and Sunday last.
pub fn format_weekly_schedule(schedule: &WeeklySchedule) -> Vec<String> {
    if schedule.is_24x7 {
        return vec![OPEN_24_7.to_string()];
    }

    Day::DISPLAY_ORDER
        .iter()
        .map(|day| match schedule.day(*day).window() {
            Some((open, close)) => format!("{}: {} - {}", day, open.to_12h(), close.to_12h()),
            None => format!("{}: Closed", day),
        })
        .collect()
}

impl WeeklySchedule {
    /// See [`is_store_open`].
    pub fn availability(&self, now: NaiveDateTime) -> AvailabilityStatus {
        is_store_open(self, now)
    }

    /// Evaluates the schedule at `instant` as seen in the store's own
    /// timezone, or in `fallback` if the store has no usable timezone.
    pub fn availability_at(&self, instant: DateTime<Utc>, fallback: Tz) -> AvailabilityStatus {
        let tz = self.tz().unwrap_or(fallback);
        let local = instant.with_timezone(&tz).naive_local();
        tracing::trace!("evaluating store hours at {} ({})", local, tz);
        is_store_open(self, local)
    }

    /// See [`format_weekly_schedule`].
    pub fn weekly_hours(&self) -> Vec<String> {
        format_weekly_schedule(self)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    // 2024-06-03 is a Monday.
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn weekday_schedule() -> WeeklySchedule {
        WeeklySchedule::default()
            .with_hours(Day::Monday, t("09:00"), t("17:00"))
            .with_hours(Day::Tuesday, t("09:00"), t("17:00"))
    }

    #[test]
    fn before_opening_points_at_today() {
        let status = weekday_schedule().availability(monday_at(7, 30));
        assert!(!status.is_open);
        assert_eq!(status.status_text, "Closed - Opens today at 9:00 AM");
        assert_eq!(status.next_change_text.as_deref(), Some("Opens today at 9:00 AM"));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let schedule = weekday_schedule();
        assert!(schedule.availability(monday_at(9, 0)).is_open);
        let last_second = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(17, 0, 59)
            .unwrap();
        assert!(schedule.availability(last_second).is_open);
        assert!(!schedule.availability(monday_at(17, 1)).is_open);
    }

    #[test]
    fn closed_with_no_hours_tomorrow() {
        let schedule =
            WeeklySchedule::default().with_hours(Day::Monday, t("09:00"), t("17:00"));
        let status = schedule.availability(monday_at(20, 0));
        assert_eq!(status, AvailabilityStatus::closed("Closed", None));
    }

    #[test]
    fn saturday_night_rolls_over_to_sunday() {
        let schedule = WeeklySchedule::default()
            .with_hours(Day::Saturday, t("10:00"), t("18:00"))
            .with_hours(Day::Sunday, t("12:00"), t("16:00"));
        // 2024-06-08 is a Saturday.
        let now = NaiveDate::from_ymd_opt(2024, 6, 8)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();
        assert_eq!(
            schedule.availability(now).status_text,
            "Closed - Opens Sunday at 12:00 PM"
        );
    }

    #[test]
    fn empty_closure_message_uses_default() {
        let schedule = WeeklySchedule {
            temporary_closure: true,
            closure_message: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(schedule.availability(monday_at(12, 0)).status_text, "Temporarily Closed");
    }

    #[test]
    fn store_timezone_shifts_evaluation_day() {
        let schedule = WeeklySchedule {
            timezone: Some("America/Los_Angeles".to_string()),
            ..weekday_schedule()
        };
        // Tuesday 02:00 UTC is still Monday 19:00 in Los Angeles.
        let instant = Utc.with_ymd_and_hms(2024, 6, 4, 2, 0, 0).unwrap();

        let in_store_time = schedule.availability_at(instant, chrono_tz::UTC);
        assert_eq!(in_store_time.status_text, "Closed - Opens Tuesday at 9:00 AM");

        let without_tz = WeeklySchedule {
            timezone: None,
            ..schedule
        };
        let in_utc = without_tz.availability_at(instant, chrono_tz::UTC);
        assert_eq!(in_utc.status_text, "Closed - Opens today at 9:00 AM");
    }

    #[test]
    fn weekly_hours_lines() {
        let lines = weekday_schedule().weekly_hours();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Monday: 9:00 AM - 5:00 PM");
        assert_eq!(lines[2], "Wednesday: Closed");
    }
}
