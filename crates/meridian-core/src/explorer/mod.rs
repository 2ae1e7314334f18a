//! High-level explorer API for browsing zones.
//!
//! The [`Explorer`] ties a [`TimeService`] to a lifecycle store and is the
//! only place where network outcomes become store transitions:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interface     │    │    Explorer     │    │   TimeService   │
//! │  (CLI, browse)  │───▶│ (zone_ops,      │───▶│ (HTTP client)   │
//! │                 │    │  selection)     │    │                 │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 │ transitions
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   StoreHandle   │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Explorer`] instances with configuration
//! - [`zone_ops`]: Loading the zone list and selecting a zone's detail
//! - [`selection`]: Expanding and collapsing entries, accordion style
//!
//! Fetch failures never surface as `Err` from these operations: they are
//! recorded in the store as `*_failed` transitions. The only errors returned
//! are argument validation errors, raised before any request is made.
//!
//! # Usage
//!
//! ```rust,no_run
//! use meridian_core::{params::SelectZone, ExplorerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let explorer = ExplorerBuilder::new().build()?;
//!
//! let list = explorer.load_zones().await;
//! println!("{} zones", list.data().map(Vec::len).unwrap_or(0));
//!
//! let detail = explorer
//!     .select_zone(&SelectZone { zone: "Europe/London".to_string() })
//!     .await?;
//! println!("{:?}", detail.status());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod selection;
pub mod zone_ops;


pub use builder::ExplorerBuilder;
pub use selection::Expansion;

use crate::{
    client::{TimeService, WorldTimeClient},
    models::ZoneId,
    store::{StoreHandle, TimeZoneState},
};

/// Main explorer interface: zone list, zone detail and the expanded entry.
pub struct Explorer<S = WorldTimeClient> {
    service: S,
    store: StoreHandle,
    expanded: Option<ZoneId>,
}

impl<S: TimeService> Explorer<S> {
    /// Creates an explorer with a fresh store.
    pub(crate) fn new(service: S) -> Self {
        Self {
            service,
            store: StoreHandle::new(),
            expanded: None,
        }
    }

    /// The time service requests go to.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Handle to the lifecycle store, for observing transitions.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Clone of the current store state.
    pub fn state(&self) -> TimeZoneState {
        self.store.snapshot()
    }
}
