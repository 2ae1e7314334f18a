//! DateTime display utilities.
//!
//! [`format_display`] renders a zone detail the way the zone browser shows
//! it, e.g. `Tuesday 3rd June 2025, 03:45 PM`: the instant from the service
//! is reinterpreted in the civil calendar of the detail's own zone, so the
//! output does not depend on the offset the service happened to send.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::{
    error::{MeridianError, Result},
    models::ZoneDetail,
};

/// Formats a zone detail as `<weekday> <ordinal day> <month> <year>, <hh>:<mm> <AM/PM>`.
///
/// # Errors
///
/// Returns [`MeridianError::InvalidTimestamp`] if `detail.datetime` is not an
/// RFC 3339 timestamp, and [`MeridianError::UnknownTimeZone`] if
/// `detail.timezone` is not in the timezone database.
///
/// # Examples
///
/// ```rust
/// use meridian_core::{
///     display::format_display,
///     models::{ZoneDetail, ZoneId},
/// };
///
/// let detail = ZoneDetail::new(
///     ZoneId::new("Europe/London"),
///     "2025-06-03T14:45:00+00:00",
///     "+01:00",
/// );
/// assert_eq!(
///     format_display(&detail).unwrap(),
///     "Tuesday 3rd June 2025, 03:45 PM"
/// );
/// ```
pub fn format_display(detail: &ZoneDetail) -> Result<String> {
    let instant = detail.timestamp()?;
    let tz = TimeZone::get(detail.timezone.as_str()).map_err(|_| {
        MeridianError::UnknownTimeZone {
            name: detail.timezone.to_string(),
        }
    })?;
    Ok(format_instant(instant, &tz))
}

/// Formats an instant in the given zone using the [`format_display`] layout.
pub fn format_instant(instant: Timestamp, tz: &TimeZone) -> String {
    let zoned = instant.to_zoned(tz.clone());
    let day = zoned.day();
    format!(
        "{} {}{} {}",
        zoned.strftime("%A"),
        day,
        ordinal_suffix(day),
        zoned.strftime("%B %Y, %I:%M %p")
    )
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: i8) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// Used for bookkeeping times such as when a snapshot was saved. The layout
/// is `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
