//! Client for the remote time service.
//!
//! [`TimeService`] is the seam between the explorer and the network. The
//! production implementation, [`WorldTimeClient`], talks to a
//! worldtimeapi-compatible REST service:
//!
//! - `GET {base}/timezone` returns a JSON array of zone identifiers
//! - `GET {base}/timezone/{zone}` returns a JSON object describing the zone
//!
//! Requests are issued once: there are no retries, no caching and no
//! timeout beyond the transport defaults.

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::{
    error::{MeridianError, Result},
    models::{ZoneDetail, ZoneId},
};

/// Base URL of the public worldtimeapi service.
pub const DEFAULT_BASE_URL: &str = "https://worldtimeapi.org/api";

/// Source of zone identifiers and zone details.
#[async_trait]
pub trait TimeService: Send + Sync {
    /// Lists every zone identifier the service knows about.
    async fn list_zones(&self) -> Result<Vec<ZoneId>>;

    /// Fetches the current civil time for one zone.
    ///
    /// Identifiers that [`ZoneId::parse`] rejects must fail with
    /// `MeridianError::InvalidArgument` before any request is made.
    async fn fetch_zone_detail(&self, zone: &ZoneId) -> Result<ZoneDetail>;
}

/// HTTP implementation of [`TimeService`].
#[derive(Debug, Clone)]
pub struct WorldTimeClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorldTimeClient {
    /// Creates a client for [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for a custom base URL. Trailing slashes are ignored.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn zones_url(&self) -> String {
        format!("{}/timezone", self.base_url)
    }

    fn zone_url(&self, zone: &ZoneId) -> String {
        format!("{}/timezone/{}", self.base_url, zone)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            warn!("GET {url} failed with status {status}");
            MeridianError::from(e)
        })?;

        let body = response.text().await?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            warn!("GET {url} returned {status} without a body");
            return Err(MeridianError::invalid_response("response body was empty"));
        }

        serde_json::from_str(trimmed).map_err(|e| {
            warn!("GET {url} returned an undecodable body: {e}");
            MeridianError::invalid_response(e.to_string())
        })
    }
}

impl Default for WorldTimeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeService for WorldTimeClient {
    async fn list_zones(&self) -> Result<Vec<ZoneId>> {
        let zones: Vec<ZoneId> = self.get_json(&self.zones_url()).await?;
        debug!("received {} zone identifiers", zones.len());
        Ok(zones)
    }

    async fn fetch_zone_detail(&self, zone: &ZoneId) -> Result<ZoneDetail> {
        // Checked again here: the identifier becomes part of the URL path.
        zone.ensure_selectable()?;

        let detail: ZoneDetail = self.get_json(&self.zone_url(zone)).await?;
        if detail.timezone != *zone {
            warn!(
                "requested {zone} but the service answered for {}",
                detail.timezone
            );
            return Err(MeridianError::invalid_response(format!(
                "requested '{zone}' but received '{}'",
                detail.timezone
            )));
        }
        Ok(detail)
    }
}
