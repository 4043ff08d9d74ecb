//! Parallel-array storage for a 2D polygonal mesh.
//!
//! Each cell dimension keeps its ids and geometry in same-length vectors,
//! plus a count that must agree with them:
//!
//! | dimension | ids            | payload                                  | markers               |
//! |-----------|----------------|------------------------------------------|-----------------------|
//! | 0 (point) | `cell0d_ids`   | `cell0d_coordinates` (`[x, y]`)          | [`MarkerIndex`]       |
//! | 1 (edge)  | `cell1d_ids`   | `cell1d_vertices` (`[start, end]`)       | [`MarkerIndex`]       |
//! | 2 (poly)  | `cell2d_ids`   | `cell2d_vertices`, `cell2d_edges`        | one `u32` per polygon |
//!
//! Polygon markers are deliberately *not* grouped into a [`MarkerIndex`];
//! they are stored per polygon, parallel to `cell2d_ids`.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshImportError;
use crate::topology::markers::{MarkerIndex, NO_MARKER};

/// A parsed `Cell0Ds` record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell0dRecord {
    pub id: u32,
    pub marker: u32,
    pub coordinates: [f64; 2],
}

/// A parsed `Cell1Ds` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell1dRecord {
    pub id: u32,
    pub marker: u32,
    pub vertices: [u32; 2],
}

/// A parsed `Cell2Ds` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell2dRecord {
    pub id: u32,
    pub marker: u32,
    pub vertices: Vec<u32>,
    pub edges: Vec<u32>,
}

static_assertions::assert_impl_all!(PolygonalMesh: Send, Sync, Clone);

/// In-memory polygonal mesh populated by the importer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonalMesh {
    number_cell0d: usize,
    cell0d_ids: Vec<u32>,
    cell0d_coordinates: Vec<[f64; 2]>,
    cell0d_markers: MarkerIndex,

    number_cell1d: usize,
    cell1d_ids: Vec<u32>,
    cell1d_vertices: Vec<[u32; 2]>,
    cell1d_markers: MarkerIndex,

    number_cell2d: usize,
    cell2d_ids: Vec<u32>,
    cell2d_vertices: Vec<Vec<u32>>,
    cell2d_edges: Vec<Vec<u32>>,
    cell2d_markers: Vec<u32>,
}

impl PolygonalMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends point records in order, indexing every non-zero marker.
    pub fn extend_cell0ds<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Cell0dRecord>,
    {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        self.cell0d_ids.reserve(lower);
        self.cell0d_coordinates.reserve(lower);
        for rec in records {
            self.cell0d_ids.push(rec.id);
            self.cell0d_coordinates.push(rec.coordinates);
            self.cell0d_markers.insert(rec.marker, rec.id);
        }
        self.number_cell0d = self.cell0d_ids.len();
        self.debug_assert_invariants();
    }

    /// Appends edge records in order, indexing every non-zero marker.
    pub fn extend_cell1ds<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Cell1dRecord>,
    {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        self.cell1d_ids.reserve(lower);
        self.cell1d_vertices.reserve(lower);
        for rec in records {
            self.cell1d_ids.push(rec.id);
            self.cell1d_vertices.push(rec.vertices);
            self.cell1d_markers.insert(rec.marker, rec.id);
        }
        self.number_cell1d = self.cell1d_ids.len();
        self.debug_assert_invariants();
    }

    /// Appends polygon records in order.
    ///
    /// Unlike points and edges, polygon markers are kept per polygon in
    /// [`cell2d_markers`](Self::cell2d_markers) and never grouped into a
    /// [`MarkerIndex`]; a zero marker is stored as-is.
    pub fn extend_cell2ds<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Cell2dRecord>,
    {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        self.cell2d_ids.reserve(lower);
        self.cell2d_vertices.reserve(lower);
        self.cell2d_edges.reserve(lower);
        self.cell2d_markers.reserve(lower);
        for rec in records {
            self.cell2d_ids.push(rec.id);
            self.cell2d_vertices.push(rec.vertices);
            self.cell2d_edges.push(rec.edges);
            self.cell2d_markers.push(rec.marker);
        }
        self.number_cell2d = self.cell2d_ids.len();
        self.debug_assert_invariants();
    }

    /// True when no table has been loaded.
    pub fn is_empty(&self) -> bool {
        self.number_cell0d == 0 && self.number_cell1d == 0 && self.number_cell2d == 0
    }

    pub fn number_cell0d(&self) -> usize {
        self.number_cell0d
    }

    pub fn cell0d_ids(&self) -> &[u32] {
        &self.cell0d_ids
    }

    pub fn cell0d_coordinates(&self) -> &[[f64; 2]] {
        &self.cell0d_coordinates
    }

    pub fn cell0d_markers(&self) -> &MarkerIndex {
        &self.cell0d_markers
    }

    /// Coordinates of point `id`, if it was loaded.
    ///
    /// Point ids address the coordinate array directly (`0..N0`).
    pub fn point(&self, id: u32) -> Option<[f64; 2]> {
        self.cell0d_coordinates.get(id as usize).copied()
    }

    pub fn number_cell1d(&self) -> usize {
        self.number_cell1d
    }

    pub fn cell1d_ids(&self) -> &[u32] {
        &self.cell1d_ids
    }

    pub fn cell1d_vertices(&self) -> &[[u32; 2]] {
        &self.cell1d_vertices
    }

    pub fn cell1d_markers(&self) -> &MarkerIndex {
        &self.cell1d_markers
    }

    pub fn number_cell2d(&self) -> usize {
        self.number_cell2d
    }

    pub fn cell2d_ids(&self) -> &[u32] {
        &self.cell2d_ids
    }

    pub fn cell2d_vertices(&self) -> &[Vec<u32>] {
        &self.cell2d_vertices
    }

    pub fn cell2d_edges(&self) -> &[Vec<u32>] {
        &self.cell2d_edges
    }

    /// Per-polygon markers, parallel to [`cell2d_ids`](Self::cell2d_ids).
    pub fn cell2d_markers(&self) -> &[u32] {
        &self.cell2d_markers
    }

    /// Iterates `(id, vertices)` for every polygon in load order.
    pub fn polygons(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.cell2d_ids
            .iter()
            .copied()
            .zip(self.cell2d_vertices.iter().map(Vec::as_slice))
    }

    fn check_lengths(
        dim: u8,
        count: usize,
        arrays: &[(&str, usize)],
    ) -> Result<(), MeshImportError> {
        for &(name, len) in arrays {
            if len != count {
                return Err(MeshImportError::InvariantViolation(format!(
                    "cell{dim}d count is {count} but `{name}` has {len} entries"
                )));
            }
        }
        Ok(())
    }

    fn check_marker_ids(
        dim: u8,
        index: &MarkerIndex,
        ids: &[u32],
    ) -> Result<(), MeshImportError> {
        for (marker, bucket) in index.iter() {
            if let Some(id) = bucket.iter().find(|id| !ids.contains(id)) {
                return Err(MeshImportError::InvariantViolation(format!(
                    "cell{dim}d marker {marker} lists id {id} which was never loaded"
                )));
            }
        }
        Ok(())
    }
}

impl PolygonalMesh {
    /// Length agreement and marker-key checks. These hold by construction,
    /// whatever the input data.
    fn check_structure(&self) -> Result<(), MeshImportError> {
        Self::check_lengths(
            0,
            self.number_cell0d,
            &[
                ("cell0d_ids", self.cell0d_ids.len()),
                ("cell0d_coordinates", self.cell0d_coordinates.len()),
            ],
        )?;
        Self::check_lengths(
            1,
            self.number_cell1d,
            &[
                ("cell1d_ids", self.cell1d_ids.len()),
                ("cell1d_vertices", self.cell1d_vertices.len()),
            ],
        )?;
        Self::check_lengths(
            2,
            self.number_cell2d,
            &[
                ("cell2d_ids", self.cell2d_ids.len()),
                ("cell2d_vertices", self.cell2d_vertices.len()),
                ("cell2d_edges", self.cell2d_edges.len()),
                ("cell2d_markers", self.cell2d_markers.len()),
            ],
        )?;
        for (dim, index) in [(0, &self.cell0d_markers), (1, &self.cell1d_markers)] {
            if index.markers().any(|m| m == NO_MARKER) {
                return Err(MeshImportError::InvariantViolation(format!(
                    "cell{dim}d marker index contains the reserved marker 0"
                )));
            }
        }
        Ok(())
    }
}

impl DebugInvariants for PolygonalMesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.check_structure(), "PolygonalMesh structure");
    }

    /// Structural checks plus cross-references between tables: marker
    /// buckets list loaded ids and edge endpoints address loaded points.
    fn validate_invariants(&self) -> Result<(), MeshImportError> {
        self.check_structure()?;
        Self::check_marker_ids(0, &self.cell0d_markers, &self.cell0d_ids)?;
        Self::check_marker_ids(1, &self.cell1d_markers, &self.cell1d_ids)?;

        for (&edge, &[start, end]) in self.cell1d_ids.iter().zip(&self.cell1d_vertices) {
            for v in [start, end] {
                if self.point(v).is_none() {
                    return Err(MeshImportError::InvariantViolation(format!(
                        "edge {edge} references unknown vertex {v}"
                    )));
                }
            }
        }
        Ok(())
    }
}
