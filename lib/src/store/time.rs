use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::Timelike;

use crate::error::{Error, ErrorKind, Result};

/// Time of day at minute granularity, as posted in store hours.
///
/// Ordering is chronological within a single day, which for zero-padded
/// 24-hour `HH:MM` strings is the same as their lexicographic ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ErrorKind::BadInput(format!(
                "time of day out of range: {:02}:{:02}",
                hour, minute
            ))
            .into());
        }
        Ok(Self { hour, minute })
    }

    /// Truncates any chrono time value down to the minute.
    pub fn from_time(time: &impl Timelike) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Formats as 12-hour clock time, e.g. `9:00 AM` or `12:30 PM`.
    pub fn to_12h(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, self.minute, suffix)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parses `HH:MM`. A trailing `:SS` component, as returned by SQL `time`
/// columns, is accepted and dropped.
impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::new(ErrorKind::ParsingError(format!("invalid time of day: {:?}", s)));

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(invalid());
        }
        let mut fields = [0u8; 3];
        for (field, part) in fields.iter_mut().zip(&parts) {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *field = part.parse().map_err(|_| invalid())?;
        }
        if fields[2] > 59 {
            return Err(invalid());
        }

        TimeOfDay::new(fields[0], fields[1]).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}
