//! MeshImportError: Unified error type for polymesh-import public APIs
//!
//! Every loader, the validator and the orchestrator return this error so a
//! failed import can be reported without panicking.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for mesh import operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshImportError {
    /// A cell table could not be opened or read.
    #[error("cannot read `{}`: {message}", .path.display())]
    FileOpen {
        path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },
    /// The table holds a header but no data records.
    #[error("`{}` contains no records after the header", .path.display())]
    EmptyInput { path: PathBuf },
    /// A field did not parse as the expected numeric type, or the record
    /// layout was inconsistent.
    #[error("`{}` line {line}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    /// A polygon has fewer than three vertices.
    #[error("polygon {polygon} has {count} vertices (at least 3 required)")]
    TooFewVertices { polygon: u32, count: usize },
    /// A polygon references a vertex id that was never loaded.
    #[error("polygon {polygon} references unknown vertex {vertex}")]
    UnknownVertex { polygon: u32, vertex: u32 },
    /// Two consecutive polygon vertices are (nearly) coincident.
    #[error("polygon {polygon}: edge {from} -> {to} has near-zero length {length:e}")]
    DegenerateEdge {
        polygon: u32,
        from: u32,
        to: u32,
        length: f64,
    },
    /// The accumulated polygon area is (nearly) zero.
    #[error("polygon {polygon} has near-zero area {area:e}")]
    DegenerateArea { polygon: u32, area: f64 },
    /// The loaded mesh violates a structural invariant.
    #[error("mesh invariant violated: {0}")]
    InvariantViolation(String),
}

impl MeshImportError {
    /// Wrap an I/O failure on `path`.
    pub fn file_open(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        MeshImportError::FileOpen {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// True for failures raised while reading the tables, false for
    /// failures raised by validation.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            MeshImportError::FileOpen { .. }
                | MeshImportError::EmptyInput { .. }
                | MeshImportError::MalformedRecord { .. }
        )
    }
}
