//! Data models for zones, zone details and fetch lifecycles.
//!
//! This module contains the domain models shared by the time service client,
//! the lifecycle store and the display layer. Display implementations live in
//! [`crate::display`] to keep presentation separate from the data.
//!
//! # Model Overview
//!
//! - [`ZoneId`]: a timezone identifier such as `Europe/London`. List data is
//!   kept exactly as the service delivered it; [`ZoneId::parse`] applies the
//!   validation rule used before any detail request.
//! - [`ZoneDetail`]: the service's description of the current civil time in
//!   one zone.
//! - [`FetchStatus`] and [`FetchState`]: the idle → loading → success/error
//!   lifecycle tracked for each remote resource.
//!
//! # Examples
//!
//! ```rust
//! use meridian_core::models::{FetchState, FetchStatus, ZoneId};
//!
//! let zone = ZoneId::parse("Europe/London").unwrap();
//! assert_eq!(zone.region(), "Europe");
//!
//! let state: FetchState<Vec<ZoneId>> = FetchState::new();
//! assert_eq!(state.status(), FetchStatus::Idle);
//! assert!(state.data().is_none());
//! ```

pub mod detail;
pub mod fetch_state;
pub mod status;
pub mod zone;


pub use detail::ZoneDetail;
pub use fetch_state::FetchState;
pub use status::FetchStatus;
pub use zone::ZoneId;
