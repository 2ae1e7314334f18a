//! Zone detail model as returned by the time service.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ZoneId;
use crate::error::{MeridianError, Result};

/// The current civil time and offset for one zone.
///
/// Only `timezone`, `datetime` and `utc_offset` are required; the remaining
/// fields are filled when the service provides them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneDetail {
    /// Zone the detail describes (matches the requested identifier)
    pub timezone: ZoneId,

    /// ISO-8601 timestamp with offset, e.g. `2025-06-03T15:45:00.123+01:00`
    pub datetime: String,

    /// Offset from UTC, e.g. `+01:00`
    pub utc_offset: String,

    /// Abbreviation of the zone at this instant, e.g. `BST`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    /// Whether daylight saving time is in effect
    #[serde(default)]
    pub dst: bool,

    /// Day of the week, 0 = Sunday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,

    /// Day of the year, 1-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_year: Option<u16>,

    /// ISO week number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u8>,

    /// Seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unixtime: Option<i64>,
}

impl ZoneDetail {
    /// Creates a detail with only the required fields set.
    pub fn new(
        timezone: ZoneId,
        datetime: impl Into<String>,
        utc_offset: impl Into<String>,
    ) -> Self {
        Self {
            timezone,
            datetime: datetime.into(),
            utc_offset: utc_offset.into(),
            abbreviation: None,
            dst: false,
            day_of_week: None,
            day_of_year: None,
            week_number: None,
            unixtime: None,
        }
    }

    /// Parses `datetime` as an absolute instant.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::InvalidTimestamp`] when `datetime` is not an
    /// RFC 3339 timestamp with an offset.
    pub fn timestamp(&self) -> Result<Timestamp> {
        self.datetime
            .parse::<Timestamp>()
            .map_err(|e| MeridianError::InvalidTimestamp {
                value: self.datetime.clone(),
                reason: e.to_string(),
            })
    }
}
