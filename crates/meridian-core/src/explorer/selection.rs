//! Accordion-style expansion of zone entries.

use log::debug;

use super::Explorer;
use crate::{
    client::TimeService,
    error::Result,
    models::{FetchState, ZoneDetail, ZoneId},
    params::SelectZone,
};

/// Outcome of toggling an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
    /// The entry was expanded and its detail fetched
    Expanded {
        zone: ZoneId,
        detail: FetchState<ZoneDetail>,
    },
    /// The entry was already expanded and is now collapsed; nothing was fetched
    Collapsed(ZoneId),
}

impl<S: TimeService> Explorer<S> {
    /// The currently expanded entry.
    pub fn expanded(&self) -> Option<&ZoneId> {
        self.expanded.as_ref()
    }

    /// Expands an entry, or collapses it when it is already expanded.
    ///
    /// Expanding another entry collapses the previous one; at most one entry
    /// is expanded at a time.
    ///
    /// # Errors
    ///
    /// Returns `MeridianError::InvalidArgument` for an invalid identifier,
    /// leaving the expanded entry unchanged.
    pub async fn toggle(&mut self, params: &SelectZone) -> Result<Expansion> {
        let zone = ZoneId::parse(&params.zone)?;
        if self.expanded.as_ref() == Some(&zone) {
            debug!("collapsing {zone}");
            self.expanded = None;
            return Ok(Expansion::Collapsed(zone));
        }

        debug!("expanding {zone}");
        self.expanded = Some(zone.clone());
        let detail = self.fetch_detail(&zone).await;
        Ok(Expansion::Expanded { zone, detail })
    }

    /// Collapses the expanded entry, if any, returning it.
    pub fn collapse(&mut self) -> Option<ZoneId> {
        self.expanded.take()
    }
}
