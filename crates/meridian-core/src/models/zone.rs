//! Timezone identifier model and validation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{MeridianError, Result};

/// Minimum length (exclusive) of an identifier that may be selected.
const MIN_SELECTABLE_LEN: usize = 3;

/// A timezone identifier such as `Europe/London` or `America/New_York`.
///
/// Identifiers received from the zone list are stored unvalidated through
/// [`ZoneId::new`]; the list may legitimately contain legacy names like
/// `EST` that cannot be selected. [`ZoneId::parse`] is the gate every detail
/// request goes through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    /// Wraps an identifier without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parses and validates an identifier for a detail request.
    ///
    /// An identifier is accepted when it is longer than three characters,
    /// contains at least one `/`, has no empty or relative (`.`, `..`)
    /// segments, and each segment only uses ASCII alphanumerics, `_`, `-`
    /// or `+`.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::InvalidArgument`] describing the first rule
    /// that failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meridian_core::models::ZoneId;
    ///
    /// assert!(ZoneId::parse("America/Argentina/Buenos_Aires").is_ok());
    /// assert!(ZoneId::parse("Etc/GMT+5").is_ok());
    /// assert!(ZoneId::parse("").is_err());
    /// assert!(ZoneId::parse("UTC").is_err());
    /// assert!(ZoneId::parse("EST5EDT").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let zone = Self(raw.to_string());
        zone.ensure_selectable()?;
        Ok(zone)
    }

    /// Whether this identifier passes the selection rule of [`ZoneId::parse`].
    pub fn is_selectable(&self) -> bool {
        validate(&self.0).is_ok()
    }

    /// Rejects identifiers built with [`ZoneId::new`] that [`ZoneId::parse`]
    /// would not accept.
    pub(crate) fn ensure_selectable(&self) -> Result<()> {
        validate(&self.0)
            .map_err(|reason| MeridianError::invalid_argument("zone").with_reason(reason))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading region segment, e.g. `Europe` for `Europe/London`.
    ///
    /// Identifiers without a separator are their own region.
    pub fn region(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }
}

fn validate(raw: &str) -> std::result::Result<(), String> {
    if raw.is_empty() {
        return Err("must not be empty".to_string());
    }
    if raw.chars().count() <= MIN_SELECTABLE_LEN {
        return Err(format!(
            "'{raw}' must be longer than {MIN_SELECTABLE_LEN} characters"
        ));
    }
    if !raw.contains('/') {
        return Err(format!("'{raw}' must contain a region separator '/'"));
    }
    for segment in raw.split('/') {
        match segment {
            "" => return Err(format!("'{raw}' must not contain empty segments")),
            "." | ".." => return Err(format!("'{raw}' must not contain relative segments")),
            _ => {}
        }
        if let Some(c) = segment
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')))
        {
            return Err(format!("'{raw}' contains invalid character '{c}'"));
        }
    }
    Ok(())
}

impl FromStr for ZoneId {
    type Err = MeridianError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ZoneId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ZoneId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
