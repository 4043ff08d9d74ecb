//! Top-level module for the in-memory mesh.
//!
//! This module provides:
//! - [`PolygonalMesh`](polygonal_mesh::PolygonalMesh), the parallel-array
//!   storage for points, edges and polygons
//! - [`MarkerIndex`](markers::MarkerIndex), the `marker -> ids` grouping used
//!   for point and edge boundary tags

pub mod markers;
pub mod polygonal_mesh;

pub use markers::{MarkerIndex, NO_MARKER};
pub use polygonal_mesh::{Cell0dRecord, Cell1dRecord, Cell2dRecord, PolygonalMesh};
