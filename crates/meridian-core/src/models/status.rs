//! Status enumeration for fetch lifecycles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of fetch statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// Nothing has been requested yet
    #[default]
    Idle,

    /// A request is in flight
    Loading,

    /// The last request completed and its data is held
    Success,

    /// The last request failed and its message is held
    Error,
}

impl FromStr for FetchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(FetchStatus::Idle),
            "loading" => Ok(FetchStatus::Loading),
            "success" => Ok(FetchStatus::Success),
            "error" => Ok(FetchStatus::Error),
            _ => Err(format!("Invalid fetch status: {s}")),
        }
    }
}

impl FetchStatus {
    /// Lowercase string representation, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Success => "success",
            FetchStatus::Error => "error",
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
