#![cfg_attr(docsrs, feature(doc_cfg))]
//! # polymesh-import
//!
//! polymesh-import reads a two-dimensional polygonal mesh from three tabular
//! text files (`Cell0Ds.csv`, `Cell1Ds.csv`, `Cell2Ds.csv`), groups boundary
//! markers, and rejects degenerate polygons before the mesh reaches
//! downstream numerical code.
//!
//! ## Features
//! - Strict, width-driven parsing of point, edge and polygon tables with any
//!   single-character field separator
//! - Insertion-ordered marker indices for points and edges
//! - Degenerate edge and degenerate area checks over every polygon
//! - Structured diagnostics delivered to a caller-chosen sink (`log` by default)
//!
//! ## Usage
//! ```no_run
//! use polymesh_import::prelude::*;
//!
//! let mut mesh = PolygonalMesh::new();
//! if !import_mesh("./Polygonal_Mesh", &mut mesh) {
//!     eprintln!("mesh import failed");
//! }
//! ```
//!
//! For control over table names, tolerance and diagnostics, use
//! [`io::MeshImporter`] with an [`io::ImportOptions`].

pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::quality::{DEFAULT_TOLERANCE, validate_mesh_geometry};
    pub use crate::io::diagnostics::{Diagnostic, DiagnosticSink, ImportReport, LogSink};
    pub use crate::io::{ImportOptions, MeshImporter, import_mesh};
    pub use crate::mesh_error::MeshImportError;
    pub use crate::topology::markers::MarkerIndex;
    pub use crate::topology::polygonal_mesh::PolygonalMesh;
}
