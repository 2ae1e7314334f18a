//! Parameter structures for Meridian operations
//!
//! These structures carry the inputs of explorer operations between the
//! interface layer (the CLI's clap arguments) and the core, without any
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Explorer     │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{display::ZoneList, models::ZoneId};

/// Parameters for viewing the loaded zone list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListZones {
    /// Only show zones whose region (the part before the first `/`)
    /// matches, case-insensitively
    pub region: Option<String>,

    /// Include identifiers that cannot be selected, such as `EST` or `UTC`
    #[serde(default)]
    pub include_all: bool,
}

impl ListZones {
    /// Whether `zone` passes this filter.
    pub fn matches(&self, zone: &ZoneId) -> bool {
        if !self.include_all && !zone.is_selectable() {
            return false;
        }
        match &self.region {
            Some(region) => zone.region().eq_ignore_ascii_case(region.trim_end_matches('/')),
            None => true,
        }
    }

    /// Applies the filter, keeping the service's order.
    pub fn apply(&self, zones: &[ZoneId]) -> ZoneList {
        ZoneList(zones.iter().filter(|zone| self.matches(zone)).cloned().collect())
    }
}

/// Parameters for selecting (expanding) one zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectZone {
    /// Zone identifier as typed by the user, validated before any request
    pub zone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ZoneId> {
        ["Africa/Abidjan", "EST", "Europe/London", "Europe/Paris", "UTC", "Etc/UTC"]
            .into_iter()
            .map(ZoneId::new)
            .collect()
    }

    #[test]
    fn test_default_hides_unselectable() {
        let list = ListZones::default().apply(&sample());
        let names: Vec<&str> = list.iter().map(ZoneId::as_str).collect();
        assert_eq!(
            names,
            ["Africa/Abidjan", "Europe/London", "Europe/Paris", "Etc/UTC"]
        );
    }

    #[test]
    fn test_include_all() {
        let params = ListZones {
            region: None,
            include_all: true,
        };
        assert_eq!(params.apply(&sample()).len(), 6);
    }

    #[test]
    fn test_region_filter_is_case_insensitive() {
        let params = ListZones {
            region: Some("europe/".to_string()),
            include_all: false,
        };
        let list = params.apply(&sample());
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|zone| zone.region() == "Europe"));
    }
}
