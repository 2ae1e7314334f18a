//! Core library for the Meridian timezone browser.
//!
//! This crate provides everything below the user interface: the client for
//! the remote time service, the fetch lifecycle store for the zone list and
//! the selected zone's detail, the explorer that drives them, and the
//! formatting of zone times for display.
//!
//! # Architecture
//!
//! - **Client** ([`client`]): [`TimeService`] and its HTTP implementation
//!   [`WorldTimeClient`]
//! - **Store** ([`store`]): [`TimeZoneState`] with pure lifecycle
//!   transitions, shared through a [`StoreHandle`]
//! - **Explorer** ([`explorer`]): turns user selections into requests and
//!   request outcomes into transitions
//! - **Display** ([`display`]): the zone time formatter and markdown panels
//! - **Snapshot** ([`snapshot`]): optional, explicit persistence of a store
//!   state for inspection
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use meridian_core::{
//!     display::DetailPanel,
//!     params::{ListZones, SelectZone},
//!     ExplorerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let explorer = ExplorerBuilder::new().build()?;
//!
//! explorer.load_zones().await;
//! for zone in &explorer.zones(&ListZones::default()) {
//!     println!("{zone}");
//! }
//!
//! let params = SelectZone { zone: "Europe/London".to_string() };
//! let detail = explorer.select_zone(&params).await?;
//! let zone = meridian_core::ZoneId::parse(&params.zone)?;
//! println!("{}", DetailPanel::new(&zone, &detail));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod explorer;
pub mod models;
pub mod params;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use client::{TimeService, WorldTimeClient, DEFAULT_BASE_URL};
pub use display::{format_display, DetailPanel, ListPanel, OperationStatus, ZoneList};
pub use error::{MeridianError, Result};
pub use explorer::{Expansion, Explorer, ExplorerBuilder};
pub use models::{FetchState, FetchStatus, ZoneDetail, ZoneId};
pub use params::{ListZones, SelectZone};
pub use snapshot::{Snapshot, SnapshotStore};
pub use store::{RequestTicket, StoreHandle, TimeZoneState};
