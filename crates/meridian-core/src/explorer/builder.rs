//! Builder for creating and configuring Explorer instances.

use super::Explorer;
use crate::{
    client::{TimeService, WorldTimeClient, DEFAULT_BASE_URL},
    error::{MeridianError, Result, ResultExt},
};

/// Builder for creating and configuring Explorer instances.
#[derive(Debug, Clone)]
pub struct ExplorerBuilder {
    base_url: Option<String>,
}

impl ExplorerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { base_url: None }
    }

    /// Sets a custom time service base URL.
    ///
    /// If not specified, uses [`DEFAULT_BASE_URL`].
    pub fn with_base_url<U: Into<String>>(mut self, base_url: Option<U>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Builds an explorer backed by the HTTP time service.
    ///
    /// # Errors
    ///
    /// Returns `MeridianError::Configuration` if the base URL is not an
    /// absolute `http` or `https` URL.
    pub fn build(self) -> Result<Explorer<WorldTimeClient>> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let parsed = reqwest::Url::parse(&base_url)
            .with_context(format!("invalid base URL '{base_url}'"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(MeridianError::Configuration {
                message: format!("base URL '{base_url}' must use http or https"),
            });
        }

        Ok(Explorer::new(WorldTimeClient::with_base_url(base_url)))
    }

    /// Builds an explorer backed by any time service.
    ///
    /// The configured base URL is ignored.
    pub fn build_with_service<S: TimeService>(self, service: S) -> Explorer<S> {
        Explorer::new(service)
    }
}

impl Default for ExplorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
