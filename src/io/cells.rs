//! Loaders for the `Cell0Ds`, `Cell1Ds` and `Cell2Ds` tables.
//!
//! # Supported format
//! Each table is a text file with one header line followed by one record per
//! line. Fields are separated by a single non-numeric character (usually `;`):
//!
//! - `Cell0Ds`: `id;marker;x;y`
//! - `Cell1Ds`: `id;marker;origin;end`
//! - `Cell2Ds`: `id;marker;numVertices;v0;...;numEdges;e0;...`
//!
//! # Limitations
//! - The header line is discarded without inspection.
//! - Blank lines are skipped; every other line must be a complete record.
//! - Polygon markers are stored per polygon and are **not** grouped into a
//!   marker index, unlike point and edge markers.
//!
//! The `parse_*` functions are pure: they turn table text into records. The
//! `load_*` functions read a file, parse it and append the records to a
//! [`PolygonalMesh`].

use std::fs;
use std::path::Path;

use crate::io::tokenizer::Tokenizer;
use crate::mesh_error::MeshImportError;
use crate::topology::polygonal_mesh::{Cell0dRecord, Cell1dRecord, Cell2dRecord, PolygonalMesh};

/// Yields `(line_number, text)` for every non-blank line after the header.
fn data_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn parse_table<T, F>(path: &Path, contents: &str, mut parse: F) -> Result<Vec<T>, MeshImportError>
where
    F: FnMut(&mut Tokenizer<'_>, usize, &str) -> Result<T, MeshImportError>,
{
    let mut tokenizer = Tokenizer::new(path);
    let records = data_lines(contents)
        .map(|(line, text)| parse(&mut tokenizer, line, text))
        .collect::<Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(MeshImportError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

/// Parses `Cell0Ds` table text into point records.
pub fn parse_cell0ds(path: &Path, contents: &str) -> Result<Vec<Cell0dRecord>, MeshImportError> {
    parse_table(path, contents, |tok, line, text| {
        let mut rec = tok.record(line, text);
        let id = rec.field("id")?;
        let marker = rec.field("marker")?;
        let x = rec.field("x coordinate")?;
        let y = rec.field("y coordinate")?;
        rec.finish()?;
        Ok(Cell0dRecord {
            id,
            marker,
            coordinates: [x, y],
        })
    })
}

/// Parses `Cell1Ds` table text into edge records.
pub fn parse_cell1ds(path: &Path, contents: &str) -> Result<Vec<Cell1dRecord>, MeshImportError> {
    parse_table(path, contents, |tok, line, text| {
        let mut rec = tok.record(line, text);
        let id = rec.field("id")?;
        let marker = rec.field("marker")?;
        let origin = rec.field("origin vertex")?;
        let end = rec.field("end vertex")?;
        rec.finish()?;
        Ok(Cell1dRecord {
            id,
            marker,
            vertices: [origin, end],
        })
    })
}

/// Parses `Cell2Ds` table text into polygon records.
///
/// The vertex count must be read before the edge count can be located, so
/// fields are consumed strictly in order.
pub fn parse_cell2ds(path: &Path, contents: &str) -> Result<Vec<Cell2dRecord>, MeshImportError> {
    parse_table(path, contents, |tok, line, text| {
        let mut rec = tok.record(line, text);
        let id = rec.field("id")?;
        let marker = rec.field("marker")?;
        let vertices = rec.counted_list("vertex")?;
        let edges = rec.counted_list("edge")?;
        rec.finish()?;
        Ok(Cell2dRecord {
            id,
            marker,
            vertices,
            edges,
        })
    })
}

fn read_table(path: &Path) -> Result<String, MeshImportError> {
    fs::read_to_string(path).map_err(|e| MeshImportError::file_open(path, &e))
}

/// Loads the point table at `path` into `mesh`. Returns the record count.
pub fn load_cell0ds(path: &Path, mesh: &mut PolygonalMesh) -> Result<usize, MeshImportError> {
    let records = parse_cell0ds(path, &read_table(path)?)?;
    let count = records.len();
    mesh.extend_cell0ds(records);
    log::debug!("loaded {count} points from {}", path.display());
    Ok(count)
}

/// Loads the edge table at `path` into `mesh`. Returns the record count.
pub fn load_cell1ds(path: &Path, mesh: &mut PolygonalMesh) -> Result<usize, MeshImportError> {
    let records = parse_cell1ds(path, &read_table(path)?)?;
    let count = records.len();
    mesh.extend_cell1ds(records);
    log::debug!("loaded {count} edges from {}", path.display());
    Ok(count)
}

/// Loads the polygon table at `path` into `mesh`. Returns the record count.
///
/// Polygon markers end up in [`PolygonalMesh::cell2d_markers`], one per
/// polygon; no marker index is built for them.
pub fn load_cell2ds(path: &Path, mesh: &mut PolygonalMesh) -> Result<usize, MeshImportError> {
    let records = parse_cell2ds(path, &read_table(path)?)?;
    let count = records.len();
    mesh.extend_cell2ds(records);
    log::debug!("loaded {count} polygons from {}", path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: &str = "Id;Marker;X;Y\n0;1;0.0;0.0\n1;0;1.0;0.0\n2;1;0.0;1.0\n";

    #[test]
    fn header_only_table_is_empty_input() {
        let err = parse_cell0ds(Path::new("Cell0Ds.csv"), "Id;Marker;X;Y\n").unwrap_err();
        assert!(matches!(err, MeshImportError::EmptyInput { .. }));
        let err = parse_cell1ds(Path::new("Cell1Ds.csv"), "").unwrap_err();
        assert!(matches!(err, MeshImportError::EmptyInput { .. }));
    }

    #[test]
    fn points_parse_in_file_order() {
        let recs = parse_cell0ds(Path::new("Cell0Ds.csv"), POINTS).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[2].id, 2);
        assert_eq!(recs[2].marker, 1);
        assert_eq!(recs[2].coordinates, [0.0, 1.0]);
    }

    #[test]
    fn crlf_and_blank_lines_are_tolerated() {
        let text = "Id;Marker;Origin;End\r\n0;2;0;1\r\n\r\n1;0;1;2\r\n";
        let recs = parse_cell1ds(Path::new("Cell1Ds.csv"), text).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].vertices, [1, 2]);
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let text = "Id;Marker;X;Y\n0;0;0.0;0.0\n1;0;abc;0.0\n";
        let err = parse_cell0ds(Path::new("Cell0Ds.csv"), text).unwrap_err();
        match err {
            MeshImportError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn polygon_lists_are_width_driven() {
        let text = "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n\
                    0;0;4;0;1;2;3;4;0;1;2;3\n\
                    1;5;3;1;4;2;3;4;5;6\n";
        let recs = parse_cell2ds(Path::new("Cell2Ds.csv"), text).unwrap();
        assert_eq!(recs[0].vertices, vec![0, 1, 2, 3]);
        assert_eq!(recs[0].edges, vec![0, 1, 2, 3]);
        assert_eq!(recs[1].marker, 5);
        assert_eq!(recs[1].vertices, vec![1, 4, 2]);
        assert_eq!(recs[1].edges, vec![4, 5, 6]);
    }

    #[test]
    fn polygon_with_short_vertex_list_is_malformed() {
        let text = "header\n0;0;3;0;1\n";
        let err = parse_cell2ds(Path::new("Cell2Ds.csv"), text).unwrap_err();
        assert!(matches!(err, MeshImportError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn huge_vertex_count_is_malformed() {
        for count in ["18446744073709551615", "4000000000000"] {
            let text = format!("header\n0;0;{count};0;1;2;3;0;1;2\n");
            let err = parse_cell2ds(Path::new("Cell2Ds.csv"), &text).unwrap_err();
            assert!(
                matches!(err, MeshImportError::MalformedRecord { line: 2, .. }),
                "unexpected error: {err:?}"
            );
        }
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let mut mesh = PolygonalMesh::new();
        let err = load_cell0ds(Path::new("/nonexistent/dir/Cell0Ds.csv"), &mut mesh).unwrap_err();
        assert!(matches!(
            err,
            MeshImportError::FileOpen { kind: std::io::ErrorKind::NotFound, .. }
        ));
        assert_eq!(mesh.number_cell0d(), 0);
    }
}
