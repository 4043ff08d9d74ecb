//! Planar polygon metrics over mesh coordinates.
//!
//! Polygons are given as ordered vertex ids; the boundary closes from the
//! last vertex back to the first.

use itertools::Itertools;

use crate::mesh_error::MeshImportError;
use crate::topology::polygonal_mesh::PolygonalMesh;

/// Consecutive vertex pairs around a polygon boundary, including the
/// closing pair `(last, first)`.
pub fn polygon_perimeter_pairs(vertices: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    vertices.iter().copied().circular_tuple_windows()
}

/// Euclidean distance between two points.
pub fn edge_length(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

/// Cross term `x1*y2 - x2*y1` of the shoelace formula for the edge `a -> b`.
pub fn shoelace_term(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[1] - b[0] * a[1]
}

/// Half the sum of |shoelace term| over every boundary edge.
///
/// The terms use raw coordinates and are accumulated unsigned, so this
/// matches the enclosed area only for convex polygons containing the
/// origin; it is a degeneracy measure, not a general area.
pub fn shoelace_area(coordinates: &[[f64; 2]]) -> f64 {
    0.5 * coordinates
        .iter()
        .copied()
        .circular_tuple_windows()
        .map(|(a, b)| shoelace_term(a, b).abs())
        .sum::<f64>()
}

/// Signed area by the shoelace formula (positive for counter-clockwise).
pub fn signed_area(coordinates: &[[f64; 2]]) -> f64 {
    0.5 * coordinates
        .iter()
        .copied()
        .circular_tuple_windows()
        .map(|(a, b)| shoelace_term(a, b))
        .sum::<f64>()
}

/// Resolves the coordinates of polygon `polygon`'s vertices.
pub fn gather_coordinates(
    mesh: &PolygonalMesh,
    polygon: u32,
    vertices: &[u32],
) -> Result<Vec<[f64; 2]>, MeshImportError> {
    vertices
        .iter()
        .map(|&v| {
            mesh.point(v)
                .ok_or(MeshImportError::UnknownVertex { polygon, vertex: v })
        })
        .collect()
}
