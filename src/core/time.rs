//! Kick-off time formatting.
//!
//! Instants arrive from the API in UTC and are shown in the viewer's time
//! zone using fixed patterns, independent of the system locale.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// `HH:MM`, 24-hour clock.
pub const KICKOFF_TIME_FORMAT: &str = "%H:%M";

/// `dd/mm HH:MM`, 24-hour clock.
pub const FIXTURE_DATE_FORMAT: &str = "%d/%m %H:%M";

/// Format `instant` in time zone `tz` with a chrono `pattern`.
pub fn format_in<Tz>(instant: DateTime<Utc>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format(pattern).to_string()
}

/// Kick-off time as shown in the upcoming report.
pub fn kickoff_time<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(instant, tz, KICKOFF_TIME_FORMAT)
}

/// Kick-off date and time as shown in the fixtures report.
pub fn fixture_date<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(instant, tz, FIXTURE_DATE_FORMAT)
}
