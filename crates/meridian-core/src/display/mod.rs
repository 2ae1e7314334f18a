//! Display formatting functions and panel types.
//!
//! All output is markdown so the CLI can render it richly or print it as
//! plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Store state    │    │  Panels &       │    │   Formatted     │
//! │ (FetchState<T>) │───▶│  formatters     │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`datetime`]: the zone detail formatter and timestamp helpers
//! - [`collections`]: [`ZoneList`], zones grouped by region
//! - [`panels`]: [`ListPanel`] and [`DetailPanel`], a lifecycle rendered in
//!   place of its data
//! - [`status`]: one-line operation feedback

pub mod collections;
pub mod datetime;
pub mod panels;
pub mod status;

pub use collections::ZoneList;
pub use datetime::{format_display, format_instant, ordinal_suffix, LocalDateTime};
pub use panels::{DetailPanel, ListPanel};
pub use status::OperationStatus;
