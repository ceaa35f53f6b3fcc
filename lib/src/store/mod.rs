//! Store opening hours and availability.

pub mod availability;
pub mod schedule;
pub mod time;

pub use availability::{format_weekly_schedule, is_store_open, AvailabilityStatus};
pub use schedule::{Day, DayHours, ScheduleRecord, WeeklySchedule};
pub use time::TimeOfDay;
