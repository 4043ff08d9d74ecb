//! Mesh import from `Cell0Ds`/`Cell1Ds`/`Cell2Ds` tables.
//!
//! This module provides the table tokenizer, the per-dimension loaders, the
//! diagnostics plumbing and the orchestrator that ties them together.

pub mod cells;
pub mod diagnostics;
pub mod import;
pub mod tokenizer;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geometry::quality::DEFAULT_TOLERANCE;

/// Options controlling a mesh import.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Point table, relative to the mesh directory.
    pub cell0d_file: PathBuf,
    /// Edge table, relative to the mesh directory.
    pub cell1d_file: PathBuf,
    /// Polygon table, relative to the mesh directory.
    pub cell2d_file: PathBuf,
    /// Length/area threshold for the degeneracy checks.
    pub tolerance: f64,
    /// Run the edge and area checks after loading.
    pub validate_geometry: bool,
    /// Check structural mesh invariants after loading.
    ///
    /// Besides array lengths and marker ids, this rejects edges whose
    /// endpoints are not loaded points, which a plain load-and-validate run
    /// accepts. Disable it to accept such edges.
    pub check_invariants: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            cell0d_file: PathBuf::from("Cell0Ds.csv"),
            cell1d_file: PathBuf::from("Cell1Ds.csv"),
            cell2d_file: PathBuf::from("Cell2Ds.csv"),
            tolerance: DEFAULT_TOLERANCE,
            validate_geometry: true,
            check_invariants: true,
        }
    }
}

impl ImportOptions {
    /// Paths of the three tables under `dir`, in load order.
    pub fn table_paths(&self, dir: &Path) -> [PathBuf; 3] {
        [
            dir.join(&self.cell0d_file),
            dir.join(&self.cell1d_file),
            dir.join(&self.cell2d_file),
        ]
    }
}

pub use import::{MeshImporter, import_mesh};
