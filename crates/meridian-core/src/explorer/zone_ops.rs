//! Loading the zone list and selecting a zone's detail.

use log::{debug, info, warn};

use super::Explorer;
use crate::{
    client::TimeService,
    display::{ListPanel, ZoneList},
    error::Result,
    models::{FetchState, ZoneDetail, ZoneId},
    params::{ListZones, SelectZone},
};

impl<S: TimeService> Explorer<S> {
    /// Loads the zone list into the store.
    ///
    /// Only one list request is in flight at a time: while the list is
    /// loading, further calls return the loading state without issuing a
    /// request. Previously loaded zones stay visible while reloading.
    ///
    /// # Returns
    ///
    /// The list state after the request settled
    pub async fn load_zones(&self) -> FetchState<Vec<ZoneId>> {
        let started = self.store.update_if(|state| {
            if state.list().is_loading() {
                return false;
            }
            state.list_fetch_started();
            true
        });
        if !started {
            debug!("zone list request already in flight");
            return self.store.read(|state| state.list().clone());
        }

        match self.service.list_zones().await {
            Ok(zones) => {
                info!("loaded {} zones", zones.len());
                self.store.update(|state| state.list_fetch_succeeded(zones));
            }
            Err(e) => {
                warn!("failed to load zones: {e}");
                let message = e.fetch_message();
                self.store.update(|state| state.list_fetch_failed(message));
            }
        }
        self.store.read(|state| state.list().clone())
    }

    /// The loaded zones, filtered by `params`.
    ///
    /// Empty unless the list loaded successfully.
    pub fn zones(&self, params: &ListZones) -> ZoneList {
        self.store
            .read(|state| ListPanel::new(state.list(), params).zones())
    }

    /// Fetches the detail of one zone into the store.
    ///
    /// The identifier is validated first; an invalid identifier is rejected
    /// without touching the network or the store.
    ///
    /// # Errors
    ///
    /// Returns `MeridianError::InvalidArgument` for an invalid identifier.
    /// Fetch failures are recorded in the returned state instead.
    ///
    /// # Returns
    ///
    /// The detail state after the request settled. When a newer selection
    /// was made meanwhile, this is the newer selection's state.
    pub async fn select_zone(&self, params: &SelectZone) -> Result<FetchState<ZoneDetail>> {
        let zone = ZoneId::parse(&params.zone)?;
        Ok(self.fetch_detail(&zone).await)
    }

    pub(crate) async fn fetch_detail(&self, zone: &ZoneId) -> FetchState<ZoneDetail> {
        let ticket = self.store.update(|state| state.detail_fetch_started());
        debug!("fetching {zone} (epoch {})", ticket.epoch());

        let applied = match self.service.fetch_zone_detail(zone).await {
            Ok(detail) => self
                .store
                .update_if(|state| state.detail_fetch_succeeded_for(ticket, detail)),
            Err(e) => {
                warn!("failed to fetch {zone}: {e}");
                let message = e.fetch_message();
                self.store
                    .update_if(|state| state.detail_fetch_failed_for(ticket, message))
            }
        };
        if !applied {
            debug!("outcome for {zone} superseded by a newer selection");
        }
        self.store.read(|state| state.detail().clone())
    }
}
