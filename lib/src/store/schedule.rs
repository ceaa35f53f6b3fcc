use chrono_tz::Tz;

use super::time::TimeOfDay;
use crate::error::{Error, Result};

/// Day of week. Discriminants follow the 0 = Sunday convention.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Day {
    /// Order in which weekly hours are presented, Sunday last.
    pub const DISPLAY_ORDER: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        Day::from_index(weekday.num_days_from_sunday() as usize)
    }
}

/// Posted hours for a single day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayHours {
    pub open: Option<TimeOfDay>,
    pub close: Option<TimeOfDay>,
}

impl DayHours {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self {
            open: Some(open),
            close: Some(close),
        }
    }

    /// Open interval for the day. A day with only one bound set has no
    /// usable interval and counts as closed.
    pub fn window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match (self.open, self.close) {
            (Some(open), Some(close)) => Some((open, close)),
            _ => None,
        }
    }
}

/// Weekly opening hours of a business together with its override flags.
///
/// Serializes to and from the flat [`ScheduleRecord`] layout used by the
/// business records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "ScheduleRecord", into = "ScheduleRecord")]
pub struct WeeklySchedule {
    /// Hours indexed by [`Day::index`].
    pub hours: [DayHours; 7],
    pub is_24x7: bool,
    /// Overrides everything else when set.
    pub temporary_closure: bool,
    pub closure_message: Option<String>,
    /// IANA timezone identifier of the store, if known.
    pub timezone: Option<String>,
}

impl WeeklySchedule {
    pub fn day(&self, day: Day) -> &DayHours {
        &self.hours[day.index()]
    }

    pub fn set_day(&mut self, day: Day, hours: DayHours) {
        self.hours[day.index()] = hours;
    }

    /// Builder-style variant of `set_day`.
    pub fn with_hours(mut self, day: Day, open: TimeOfDay, close: TimeOfDay) -> Self {
        self.set_day(day, DayHours::new(open, close));
        self
    }

    /// Parses the stored timezone identifier. Unknown identifiers are
    /// reported and treated as absent.
    pub fn tz(&self) -> Option<Tz> {
        let name = self.timezone.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(e) => {
                tracing::warn!("unknown store timezone {:?}: {}", name, e);
                None
            }
        }
    }
}

/// Flat schedule layout as stored on business records, with one optional
/// `HH:MM` string per day and bound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleRecord {
    pub monday_open: Option<String>,
    pub monday_close: Option<String>,
    pub tuesday_open: Option<String>,
    pub tuesday_close: Option<String>,
    pub wednesday_open: Option<String>,
    pub wednesday_close: Option<String>,
    pub thursday_open: Option<String>,
    pub thursday_close: Option<String>,
    pub friday_open: Option<String>,
    pub friday_close: Option<String>,
    pub saturday_open: Option<String>,
    pub saturday_close: Option<String>,
    pub sunday_open: Option<String>,
    pub sunday_close: Option<String>,

    #[serde(alias = "is_24x7")]
    pub is_24_7: bool,
    pub temporary_closure: bool,
    pub closure_message: Option<String>,
    pub timezone: Option<String>,
}

impl ScheduleRecord {
    fn bounds(&self, day: Day) -> (&Option<String>, &Option<String>) {
        match day {
            Day::Sunday => (&self.sunday_open, &self.sunday_close),
            Day::Monday => (&self.monday_open, &self.monday_close),
            Day::Tuesday => (&self.tuesday_open, &self.tuesday_close),
            Day::Wednesday => (&self.wednesday_open, &self.wednesday_close),
            Day::Thursday => (&self.thursday_open, &self.thursday_close),
            Day::Friday => (&self.friday_open, &self.friday_close),
            Day::Saturday => (&self.saturday_open, &self.saturday_close),
        }
    }

    fn bounds_mut(&mut self, day: Day) -> (&mut Option<String>, &mut Option<String>) {
        match day {
            Day::Sunday => (&mut self.sunday_open, &mut self.sunday_close),
            Day::Monday => (&mut self.monday_open, &mut self.monday_close),
            Day::Tuesday => (&mut self.tuesday_open, &mut self.tuesday_close),
            Day::Wednesday => (&mut self.wednesday_open, &mut self.wednesday_close),
            Day::Thursday => (&mut self.thursday_open, &mut self.thursday_close),
            Day::Friday => (&mut self.friday_open, &mut self.friday_close),
            Day::Saturday => (&mut self.saturday_open, &mut self.saturday_close),
        }
    }
}

/// Empty strings are what the onboarding forms store for unset hours, so
/// they count as absent.
fn parse_bound(value: &Option<String>, field: String) -> Result<Option<TimeOfDay>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<TimeOfDay>()
            .map(Some)
            .map_err(|e| e.with_context(field)),
    }
}

impl TryFrom<ScheduleRecord> for WeeklySchedule {
    type Error = Error;

    fn try_from(record: ScheduleRecord) -> Result<Self> {
        let mut schedule = WeeklySchedule {
            hours: Default::default(),
            is_24x7: record.is_24_7,
            temporary_closure: record.temporary_closure,
            closure_message: record.closure_message.clone(),
            timezone: record.timezone.clone(),
        };
        for day in Day::ALL {
            let (open, close) = record.bounds(day);
            let name = day.to_string().to_lowercase();
            let hours = DayHours {
                open: parse_bound(open, format!("{}_open", name))?,
                close: parse_bound(close, format!("{}_close", name))?,
            };
            schedule.set_day(day, hours);
        }
        Ok(schedule)
    }
}

impl From<WeeklySchedule> for ScheduleRecord {
    fn from(schedule: WeeklySchedule) -> Self {
        let mut record = ScheduleRecord {
            is_24_7: schedule.is_24x7,
            temporary_closure: schedule.temporary_closure,
            closure_message: schedule.closure_message.clone(),
            timezone: schedule.timezone.clone(),
            ..Default::default()
        };
        for day in Day::ALL {
            let hours = schedule.day(day);
            let (open, close) = record.bounds_mut(day);
            *open = hours.open.map(|t| t.to_string());
            *close = hours.close.map(|t| t.to_string());
        }
        record
    }
}

impl std::str::FromStr for WeeklySchedule {
    type Err = Error;

    /// Parses a schedule record from TOML.
    fn from_str(s: &str) -> Result<Self> {
        let record: ScheduleRecord = toml::from_str(s)?;
        record.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn day_indices_start_on_sunday() {
        assert_eq!(Day::Sunday.index(), 0);
        assert_eq!(Day::Saturday.index(), 6);
        assert_eq!(Day::Saturday.next(), Day::Sunday);
        assert_eq!(Day::from(chrono::Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(chrono::Weekday::Sun), Day::Sunday);
    }

    #[test]
    fn half_set_day_has_no_window() {
        let hours = DayHours {
            open: Some(t("09:00")),
            close: None,
        };
        assert_eq!(hours.window(), None);
    }

    #[test]
    fn record_converts_into_schedule() {
        let schedule: WeeklySchedule = r#"
            monday_open = "09:00"
            monday_close = "17:00"
            saturday_open = ""
            sunday_open = "10:00:00"
            sunday_close = "14:00:00"
            timezone = "America/Chicago"
        "#
        .parse()
        .unwrap();

        assert_eq!(schedule.day(Day::Monday).window(), Some((t("09:00"), t("17:00"))));
        assert_eq!(schedule.day(Day::Saturday), &DayHours::default());
        assert_eq!(schedule.day(Day::Sunday).window(), Some((t("10:00"), t("14:00"))));
        assert_eq!(schedule.tz(), Some(chrono_tz::America::Chicago));
        assert!(!schedule.is_24x7);
    }

    #[test]
    fn malformed_time_reports_field() {
        let err = "tuesday_close = \"5pm\"".parse::<WeeklySchedule>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ParsingError(_)));
        assert_eq!(err.context.as_deref(), Some("tuesday_close"));
    }

    #[test]
    fn accepts_24x7_alias() {
        let schedule: WeeklySchedule =
            serde_json::from_str(r#"{"is_24x7": true, "temporary_closure": false}"#).unwrap();
        assert!(schedule.is_24x7);
    }

    #[test]
    fn serializes_back_to_flat_record() {
        let schedule = WeeklySchedule::default().with_hours(Day::Friday, t("08:00"), t("22:30"));
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["friday_open"], "08:00");
        assert_eq!(json["friday_close"], "22:30");
        assert!(json["monday_open"].is_null());
    }

    #[test]
    fn unknown_timezone_is_ignored() {
        let schedule = WeeklySchedule {
            timezone: Some("Mars/Olympus_Mons".to_string()),
            ..Default::default()
        };
        assert_eq!(schedule.tz(), None);
    }
}
