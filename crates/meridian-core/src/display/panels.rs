//! Panels rendering a fetch lifecycle in place of its data.
//!
//! A panel shows what a user sees for one resource: a loading notice while
//! a request is in flight, the raw error message after a failure, and the
//! data once it has arrived.

use std::fmt;

use super::{datetime::format_display, ZoneList};
use crate::{
    models::{FetchState, FetchStatus, ZoneDetail, ZoneId},
    params::ListZones,
};

/// Shown while the zone list is loading.
pub const LIST_LOADING: &str = "Loading...Please Wait";

/// Shown while a zone detail is loading.
pub const DETAIL_LOADING: &str = "Loading Data...Please Wait";

/// The zone list panel.
pub struct ListPanel<'a> {
    pub state: &'a FetchState<Vec<ZoneId>>,
    pub filter: &'a ListZones,
}

impl<'a> ListPanel<'a> {
    pub fn new(state: &'a FetchState<Vec<ZoneId>>, filter: &'a ListZones) -> Self {
        Self { state, filter }
    }

    /// The filtered zones, empty unless the list loaded successfully.
    pub fn zones(&self) -> ZoneList {
        match (self.state.status(), self.state.data()) {
            (FetchStatus::Success, Some(zones)) => self.filter.apply(zones),
            _ => ZoneList::default(),
        }
    }
}

impl fmt::Display for ListPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.status() {
            FetchStatus::Idle | FetchStatus::Loading => writeln!(f, "{LIST_LOADING}"),
            FetchStatus::Error => {
                writeln!(f, "Error: {}", self.state.error().unwrap_or_default())
            }
            FetchStatus::Success => write!(f, "{}", self.zones()),
        }
    }
}

/// The detail panel of one expanded zone.
///
/// Detail data held for a different zone than the expanded one is not
/// shown; the panel stays empty until the matching detail arrives.
pub struct DetailPanel<'a> {
    pub zone: &'a ZoneId,
    pub state: &'a FetchState<ZoneDetail>,
}

impl<'a> DetailPanel<'a> {
    pub fn new(zone: &'a ZoneId, state: &'a FetchState<ZoneDetail>) -> Self {
        Self { zone, state }
    }
}

impl fmt::Display for DetailPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.zone)?;
        writeln!(f)?;
        match (self.state.status(), self.state.data()) {
            (FetchStatus::Error, _) => {
                writeln!(f, "Error: {}", self.state.error().unwrap_or_default())
            }
            (FetchStatus::Success, Some(detail)) if detail.timezone == *self.zone => {
                match format_display(detail) {
                    Ok(formatted) => writeln!(f, "**{formatted}**")?,
                    Err(e) => return writeln!(f, "Error: {e}"),
                }
                writeln!(f)?;
                writeln!(f, "- **UTC offset:** {}", detail.utc_offset)?;
                if let Some(abbreviation) = &detail.abbreviation {
                    writeln!(f, "- **Abbreviation:** {abbreviation}")?;
                }
                writeln!(
                    f,
                    "- **Daylight saving:** {}",
                    if detail.dst { "yes" } else { "no" }
                )?;
                if let Some(week) = detail.week_number {
                    writeln!(f, "- **Week:** {week}")?;
                }
                Ok(())
            }
            (FetchStatus::Success, _) => Ok(()),
            (FetchStatus::Idle | FetchStatus::Loading, _) => writeln!(f, "{DETAIL_LOADING}"),
        }
    }
}
