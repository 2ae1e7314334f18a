//! Fetch lifecycle store for the zone list and the selected zone's detail.
//!
//! [`TimeZoneState`] is a plain value holding two independent
//! [`FetchState`]s and the transitions that move them through their
//! lifecycle. Transitions are pure state updates: no I/O happens here. The
//! [`StoreHandle`] wraps a state in a watch channel so several tasks can
//! apply transitions and observe the result.
//!
//! # Detail request epochs
//!
//! Detail requests may overlap when a user expands entries quickly. Each
//! call to [`TimeZoneState::detail_fetch_started`] issues a
//! [`RequestTicket`]; the ticket-checked transitions only apply the outcome
//! of the most recent request, so a slow response for an earlier zone can
//! never overwrite a newer one.
//!
//! ```rust
//! use meridian_core::{
//!     models::{ZoneDetail, ZoneId},
//!     store::TimeZoneState,
//! };
//!
//! let mut state = TimeZoneState::new();
//! let first = state.detail_fetch_started();
//! let second = state.detail_fetch_started();
//!
//! let london = ZoneDetail::new(
//!     ZoneId::new("Europe/London"),
//!     "2025-06-03T15:45:00+01:00",
//!     "+01:00",
//! );
//! // The first request resolves late and is discarded.
//! assert!(!state.detail_fetch_succeeded_for(first, london));
//! assert!(state.detail().is_loading());
//!
//! assert!(state.detail_fetch_failed_for(second, "Network Error".into()));
//! assert_eq!(state.detail().error(), Some("Network Error"));
//! ```

pub mod handle;

#[cfg(test)]
mod tests;

use log::{debug, info};
use serde::{Deserialize, Serialize};

pub use handle::StoreHandle;

use crate::models::{FetchState, ZoneDetail, ZoneId};

/// Tag identifying one detail request.
///
/// The default ticket is never issued, so it is never current.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// The epoch number this ticket was issued for.
    pub fn epoch(&self) -> u64 {
        self.0
    }
}

/// State of the zone list and the zone detail resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeZoneState {
    list: FetchState<Vec<ZoneId>>,
    detail: FetchState<ZoneDetail>,
    #[serde(default)]
    detail_epoch: u64,
}

impl TimeZoneState {
    /// Creates a state with both resources idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone list lifecycle.
    pub fn list(&self) -> &FetchState<Vec<ZoneId>> {
        &self.list
    }

    /// Zone detail lifecycle.
    pub fn detail(&self) -> &FetchState<ZoneDetail> {
        &self.detail
    }

    /// Ticket of the most recent detail request, if any was started.
    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.detail_epoch > 0).then_some(RequestTicket(self.detail_epoch))
    }

    /// Whether `ticket` belongs to the most recent detail request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest_ticket() == Some(ticket)
    }

    /// Checks both lifecycles for invalid status/data/error combinations.
    ///
    /// A failed list may hold the empty list it was cleared to; a failed
    /// detail holds nothing.
    pub fn is_consistent(&self) -> bool {
        self.list.is_consistent_with(Vec::is_empty) && self.detail.is_consistent()
    }

    /// Marks the zone list as loading. Previously loaded zones are kept.
    pub fn list_fetch_started(&mut self) {
        debug!("zone list: loading");
        self.list.begin(true);
    }

    /// Stores the loaded zone list.
    pub fn list_fetch_succeeded(&mut self, zones: Vec<ZoneId>) {
        debug!("zone list: loaded {} zones", zones.len());
        self.list.succeed(zones);
    }

    /// Records a zone list failure; the list becomes empty.
    pub fn list_fetch_failed(&mut self, message: String) {
        debug!("zone list: failed: {message}");
        self.list.fail(message, Some(Vec::new()));
    }

    /// Marks the detail as loading, dropping any previous detail or error.
    ///
    /// Returns the ticket of the new request.
    pub fn detail_fetch_started(&mut self) -> RequestTicket {
        self.detail_epoch += 1;
        debug!("zone detail: loading (epoch {})", self.detail_epoch);
        self.detail.begin(false);
        RequestTicket(self.detail_epoch)
    }

    /// Stores the loaded detail regardless of which request produced it.
    pub fn detail_fetch_succeeded(&mut self, detail: ZoneDetail) {
        debug!("zone detail: loaded {}", detail.timezone);
        self.detail.succeed(detail);
    }

    /// Records a detail failure; no detail is held afterwards.
    pub fn detail_fetch_failed(&mut self, message: String) {
        debug!("zone detail: failed: {message}");
        self.detail.fail(message, None);
    }

    /// Stores the loaded detail if `ticket` is still current.
    ///
    /// Returns `false` and leaves the state untouched for a stale ticket.
    pub fn detail_fetch_succeeded_for(
        &mut self,
        ticket: RequestTicket,
        detail: ZoneDetail,
    ) -> bool {
        if !self.is_current(ticket) {
            info!(
                "discarding stale detail for {} (epoch {}, latest {})",
                detail.timezone, ticket.0, self.detail_epoch
            );
            return false;
        }
        self.detail_fetch_succeeded(detail);
        true
    }

    /// Records a detail failure if `ticket` is still current.
    ///
    /// Returns `false` and leaves the state untouched for a stale ticket.
    pub fn detail_fetch_failed_for(&mut self, ticket: RequestTicket, message: String) -> bool {
        if !self.is_current(ticket) {
            info!(
                "discarding stale detail failure (epoch {}, latest {}): {message}",
                ticket.0, self.detail_epoch
            );
            return false;
        }
        self.detail_fetch_failed(message);
        true
    }
}
