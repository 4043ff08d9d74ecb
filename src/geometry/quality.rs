//! Degeneracy checks for loaded polygons.
//!
//! Two passes run over every polygon of a [`PolygonalMesh`]:
//!
//! 1. **Edges**: the polygon must have at least three vertices and every
//!    boundary edge (including the closing edge) must be at least
//!    `tolerance` long.
//! 2. **Area**: half the unsigned shoelace accumulation over raw
//!    coordinates (see [`shoelace_area`]) must be at least `tolerance`.
//!
//! The edge pass completes over all polygons before the area pass starts,
//! and the first failure ends validation.
//!
//! # Examples
//! ```rust
//! use polymesh_import::geometry::quality::{validate_mesh_geometry, DEFAULT_TOLERANCE};
//! use polymesh_import::topology::polygonal_mesh::{Cell0dRecord, Cell2dRecord, PolygonalMesh};
//!
//! let mut mesh = PolygonalMesh::new();
//! mesh.extend_cell0ds([
//!     Cell0dRecord { id: 0, marker: 0, coordinates: [0.0, 0.0] },
//!     Cell0dRecord { id: 1, marker: 0, coordinates: [1.0, 0.0] },
//!     Cell0dRecord { id: 2, marker: 0, coordinates: [0.0, 1.0] },
//! ]);
//! mesh.extend_cell2ds([Cell2dRecord { id: 0, marker: 0, vertices: vec![0, 1, 2], edges: vec![] }]);
//!
//! let checked = validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE)?;
//! assert_eq!(checked, 1);
//! # Ok::<(), polymesh_import::mesh_error::MeshImportError>(())
//! ```

use itertools::Itertools;

use crate::geometry::polygon::{
    edge_length, gather_coordinates, polygon_perimeter_pairs, shoelace_area,
};
use crate::mesh_error::MeshImportError;
use crate::topology::polygonal_mesh::PolygonalMesh;

/// Length and area threshold below which geometry counts as degenerate.
pub const DEFAULT_TOLERANCE: f64 = 1e-16;

const MIN_POLYGON_VERTICES: usize = 3;

/// Basic size metrics for a single polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonQuality {
    /// Shortest boundary edge.
    pub min_edge_length: f64,
    /// Half the unsigned shoelace accumulation.
    pub area: f64,
}

/// Computes metrics for `polygon` without judging them.
pub fn polygon_quality(
    mesh: &PolygonalMesh,
    polygon: u32,
    vertices: &[u32],
) -> Result<PolygonQuality, MeshImportError> {
    let coords = gather_coordinates(mesh, polygon, vertices)?;
    let min_edge_length = coords
        .iter()
        .copied()
        .circular_tuple_windows()
        .map(|(a, b)| edge_length(a, b))
        .fold(f64::INFINITY, f64::min);
    Ok(PolygonQuality {
        min_edge_length,
        area: shoelace_area(&coords),
    })
}

fn vertex_point(mesh: &PolygonalMesh, polygon: u32, vertex: u32) -> Result<[f64; 2], MeshImportError> {
    mesh.point(vertex)
        .ok_or(MeshImportError::UnknownVertex { polygon, vertex })
}

fn check_vertex_count(polygon: u32, vertices: &[u32]) -> Result<(), MeshImportError> {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return Err(MeshImportError::TooFewVertices {
            polygon,
            count: vertices.len(),
        });
    }
    Ok(())
}

/// Rejects `polygon` if it has fewer than three vertices or a boundary edge
/// shorter than `tolerance`.
pub fn validate_polygon_edges(
    mesh: &PolygonalMesh,
    polygon: u32,
    vertices: &[u32],
    tolerance: f64,
) -> Result<(), MeshImportError> {
    check_vertex_count(polygon, vertices)?;
    for (from, to) in polygon_perimeter_pairs(vertices) {
        let length = edge_length(
            vertex_point(mesh, polygon, from)?,
            vertex_point(mesh, polygon, to)?,
        );
        if length < tolerance {
            return Err(MeshImportError::DegenerateEdge {
                polygon,
                from,
                to,
                length,
            });
        }
    }
    Ok(())
}

/// Rejects `polygon` if it has fewer than three vertices or its shoelace
/// area is below `tolerance`.
pub fn validate_polygon_area(
    mesh: &PolygonalMesh,
    polygon: u32,
    vertices: &[u32],
    tolerance: f64,
) -> Result<(), MeshImportError> {
    check_vertex_count(polygon, vertices)?;
    let area = shoelace_area(&gather_coordinates(mesh, polygon, vertices)?);
    if area.abs() < tolerance {
        return Err(MeshImportError::DegenerateArea { polygon, area });
    }
    Ok(())
}

/// Runs the edge pass then the area pass over every polygon in `mesh`.
///
/// Returns the number of polygons checked.
pub fn validate_mesh_geometry(
    mesh: &PolygonalMesh,
    tolerance: f64,
) -> Result<usize, MeshImportError> {
    for (id, vertices) in mesh.polygons() {
        validate_polygon_edges(mesh, id, vertices, tolerance)?;
    }
    for (id, vertices) in mesh.polygons() {
        validate_polygon_area(mesh, id, vertices, tolerance)?;
    }
    Ok(mesh.number_cell2d())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::polygonal_mesh::{Cell0dRecord, Cell2dRecord};

    fn mesh_with(points: &[[f64; 2]], polygons: &[&[u32]]) -> PolygonalMesh {
        let mut mesh = PolygonalMesh::new();
        mesh.extend_cell0ds(points.iter().enumerate().map(|(i, &c)| Cell0dRecord {
            id: i as u32,
            marker: 0,
            coordinates: c,
        }));
        mesh.extend_cell2ds(polygons.iter().enumerate().map(|(i, v)| Cell2dRecord {
            id: i as u32,
            marker: 0,
            vertices: v.to_vec(),
            edges: Vec::new(),
        }));
        mesh
    }

    #[test]
    fn unit_triangle_passes() {
        let mesh = mesh_with(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], &[&[0, 1, 2]]);
        assert_eq!(validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE), Ok(1));
        let q = polygon_quality(&mesh, 0, &[0, 1, 2]).unwrap();
        assert_eq!(q.area, 0.5);
        assert_eq!(q.min_edge_length, 1.0);
    }

    #[test]
    fn two_vertices_are_too_few() {
        let mesh = mesh_with(&[[0.0, 0.0], [1.0, 0.0]], &[&[0, 1]]);
        assert_eq!(
            validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE),
            Err(MeshImportError::TooFewVertices {
                polygon: 0,
                count: 2
            })
        );
    }

    #[test]
    fn coincident_vertices_fail_on_edge_check() {
        let mesh = mesh_with(
            &[[1.0, 1.0], [1.0, 1.0], [0.0, 2.0]],
            &[&[0, 1, 2]],
        );
        let err = validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE).unwrap_err();
        assert_eq!(
            err,
            MeshImportError::DegenerateEdge {
                polygon: 0,
                from: 0,
                to: 1,
                length: 0.0
            }
        );
    }

    #[test]
    fn closing_edge_is_checked() {
        let mesh = mesh_with(
            &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
            &[&[0, 1, 2, 3]],
        );
        let err = validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE).unwrap_err();
        assert!(
            matches!(err, MeshImportError::DegenerateEdge { from: 3, to: 0, .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn collinear_through_origin_has_zero_area() {
        let mesh = mesh_with(
            &[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]],
            &[&[0, 1, 2]],
        );
        let err = validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(err, MeshImportError::DegenerateArea { polygon: 0, .. }));
    }

    #[test]
    fn edge_pass_runs_over_all_polygons_before_area_pass() {
        // Polygon 0 is flat (area failure), polygon 1 has a zero-length edge.
        let mesh = mesh_with(
            &[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 0.0], [3.0, 0.0], [4.0, 1.0]],
            &[&[0, 1, 2], &[3, 4, 5]],
        );
        let err = validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(err, MeshImportError::DegenerateEdge { polygon: 1, .. }));
    }

    #[test]
    fn unknown_vertex_is_reported() {
        let mesh = mesh_with(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], &[&[0, 1, 7]]);
        assert_eq!(
            validate_mesh_geometry(&mesh, DEFAULT_TOLERANCE),
            Err(MeshImportError::UnknownVertex {
                polygon: 0,
                vertex: 7
            })
        );
    }
}
