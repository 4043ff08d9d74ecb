//! Marker index storage for boundary tags.
//!
//! A marker groups the ids of every entity that carries it. Marker `0`
//! means "untagged" and is never stored, so iterating an index only yields
//! real boundary or region tags.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Marker value reserved for untagged entities.
pub const NO_MARKER: u32 = 0;

/// Ordered mapping `marker -> ids`, with ids kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerIndex {
    buckets: BTreeMap<u32, Vec<u32>>,
}

impl MarkerIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` to the bucket of `marker`, creating the bucket on first
    /// sight.
    ///
    /// Returns `false` without touching the index when `marker` is
    /// [`NO_MARKER`].
    pub fn insert(&mut self, marker: u32, id: u32) -> bool {
        if marker == NO_MARKER {
            return false;
        }
        self.buckets.entry(marker).or_default().push(id);
        true
    }

    /// Ids tagged with `marker`, in insertion order.
    pub fn ids(&self, marker: u32) -> &[u32] {
        self.buckets.get(&marker).map_or(&[][..], Vec::as_slice)
    }

    /// Distinct markers, ascending.
    pub fn markers(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets.keys().copied()
    }

    /// `(marker, ids)` pairs, markers ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.buckets.iter().map(|(&m, ids)| (m, ids.as_slice()))
    }

    /// Number of distinct markers.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of tagged ids across all buckets.
    pub fn tagged_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Owned copy of the buckets, used by diagnostics.
    pub fn to_table(&self) -> Vec<(u32, Vec<u32>)> {
        self.buckets
            .iter()
            .map(|(&m, ids)| (m, ids.clone()))
            .collect()
    }
}

/// Writes one `key:\t<marker>\t values:\t<id>\t<id>...` line, without the
/// trailing newline.
pub fn write_marker_line(f: &mut impl fmt::Write, marker: u32, ids: &[u32]) -> fmt::Result {
    write!(f, "key:\t{marker}\t values:\t{}", ids.iter().join("\t"))
}

impl fmt::Display for MarkerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (marker, ids) in self.iter() {
            write_marker_line(f, marker, ids)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
