//! Collection wrapper types for displaying groups of zones.

use std::{fmt, ops::Index};

use crate::models::ZoneId;

/// Newtype wrapper for displaying a list of zone identifiers.
///
/// Zones are grouped under a markdown header per region, in the order the
/// service delivered them. Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use meridian_core::{display::ZoneList, models::ZoneId};
///
/// let zones = ZoneList(vec![
///     ZoneId::new("Europe/London"),
///     ZoneId::new("Europe/Paris"),
///     ZoneId::new("Asia/Tokyo"),
/// ]);
/// let output = zones.to_string();
/// assert!(output.contains("## Europe (2)"));
/// assert!(output.contains("- Asia/Tokyo"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneList(pub Vec<ZoneId>);

impl ZoneList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of zones in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the zone at the given index.
    pub fn get(&self, index: usize) -> Option<&ZoneId> {
        self.0.get(index)
    }

    /// Get an iterator over the zones.
    pub fn iter(&self) -> std::slice::Iter<'_, ZoneId> {
        self.0.iter()
    }

    /// Regions in first-seen order, with the number of zones in each.
    pub fn regions(&self) -> Vec<(&str, usize)> {
        let mut regions: Vec<(&str, usize)> = Vec::new();
        for zone in &self.0 {
            match regions.iter_mut().find(|(region, _)| *region == zone.region()) {
                Some((_, count)) => *count += 1,
                None => regions.push((zone.region(), 1)),
            }
        }
        regions
    }
}

impl Index<usize> for ZoneList {
    type Output = ZoneId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ZoneList {
    type Item = ZoneId;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ZoneList {
    type Item = &'a ZoneId;
    type IntoIter = std::slice::Iter<'a, ZoneId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ZoneList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No zones found.");
        }
        for (i, (region, count)) in self.regions().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "## {region} ({count})")?;
            writeln!(f)?;
            for zone in self.0.iter().filter(|zone| zone.region() == region) {
                writeln!(f, "- {zone}")?;
            }
        }
        Ok(())
    }
}
