#![allow(dead_code)]
use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const POINT_HEADER: &str = "Id;Marker;X;Y";
pub const EDGE_HEADER: &str = "Id;Marker;Origin;End";
pub const POLYGON_HEADER: &str = "Id;Marker;NumVertices;Vertices;NumEdges;Edges";

/// Writes `header` followed by `rows` (one per line) to `dir/name`.
pub fn write_table(dir: &Path, name: &str, header: &str, rows: &[&str]) {
    let mut text = String::from(header);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    fs::write(dir.join(name), text).unwrap();
}

/// Creates a temporary mesh directory with the three tables.
pub fn mesh_dir(points: &[&str], edges: &[&str], polygons: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "Cell0Ds.csv", POINT_HEADER, points);
    write_table(dir.path(), "Cell1Ds.csv", EDGE_HEADER, edges);
    write_table(dir.path(), "Cell2Ds.csv", POLYGON_HEADER, polygons);
    dir
}

/// Unit right triangle (0,0), (1,0), (0,1) with consistent edges.
pub fn unit_triangle() -> TempDir {
    mesh_dir(
        &["0;1;0.0;0.0", "1;2;1.0;0.0", "2;1;0.0;1.0"],
        &["0;4;0;1", "1;0;1;2", "2;4;2;0"],
        &["0;0;3;0;1;2;3;0;1;2"],
    )
}

/// Unit square split into two triangles, with boundary markers on the
/// outer points and edges.
pub fn split_square() -> TempDir {
    mesh_dir(
        &["0;1;0.0;0.0", "1;2;1.0;0.0", "2;3;1.0;1.0", "3;4;0.0;1.0"],
        &[
            "0;5;0;1",
            "1;6;1;2",
            "2;7;2;3",
            "3;8;3;0",
            "4;0;0;2",
        ],
        &["0;0;3;0;1;2;3;0;1;4", "1;0;3;0;2;3;3;4;2;3"],
    )
}
