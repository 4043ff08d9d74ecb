//! Directory-level mesh import.
//!
//! [`MeshImporter`] loads the point, edge and polygon tables of a mesh
//! directory in that order, reports the point and edge marker tables, then
//! validates the result. Any failure stops the import immediately; there is
//! no partial recovery.

use std::path::Path;

use crate::debug_invariants::DebugInvariants;
use crate::geometry::quality::validate_mesh_geometry;
use crate::io::ImportOptions;
use crate::io::cells::{load_cell0ds, load_cell1ds, load_cell2ds};
use crate::io::diagnostics::{CellDimension, Diagnostic, DiagnosticSink, ImportReport, LogSink};
use crate::mesh_error::MeshImportError;
use crate::topology::polygonal_mesh::PolygonalMesh;

/// Imports polygonal meshes from table directories.
#[derive(Clone, Debug, Default)]
pub struct MeshImporter {
    options: ImportOptions,
}

impl MeshImporter {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports the mesh stored under `dir`, sending diagnostics to `sink`.
    ///
    /// The failure, if any, is also emitted as [`Diagnostic::Failed`].
    pub fn import<S>(&self, dir: &Path, sink: &mut S) -> Result<PolygonalMesh, MeshImportError>
    where
        S: DiagnosticSink + ?Sized,
    {
        let mut mesh = PolygonalMesh::new();
        self.import_into(dir, &mut mesh, sink)?;
        Ok(mesh)
    }

    /// Imports and collects every diagnostic into an [`ImportReport`].
    pub fn import_with_report(
        &self,
        dir: &Path,
    ) -> (Result<PolygonalMesh, MeshImportError>, ImportReport) {
        let mut report = ImportReport::default();
        let result = self.import(dir, &mut report);
        (result, report)
    }

    /// Populates the empty `mesh` from `dir`.
    ///
    /// On failure `mesh` keeps whatever tables were loaded before the
    /// failing stage.
    pub fn import_into<S>(
        &self,
        dir: &Path,
        mesh: &mut PolygonalMesh,
        sink: &mut S,
    ) -> Result<(), MeshImportError>
    where
        S: DiagnosticSink + ?Sized,
    {
        let result = self.run(dir, mesh, sink);
        if let Err(err) = &result {
            sink.emit(Diagnostic::Failed(err.clone()));
        }
        result
    }

    fn run<S>(
        &self,
        dir: &Path,
        mesh: &mut PolygonalMesh,
        sink: &mut S,
    ) -> Result<(), MeshImportError>
    where
        S: DiagnosticSink + ?Sized,
    {
        if !mesh.is_empty() {
            return Err(MeshImportError::InvariantViolation(
                "import target mesh is already populated".into(),
            ));
        }
        let [cell0d_path, cell1d_path, cell2d_path] = self.options.table_paths(dir);

        let records = load_cell0ds(&cell0d_path, mesh)?;
        sink.emit(Diagnostic::Loaded {
            dimension: CellDimension::Cell0D,
            path: cell0d_path,
            records,
        });
        sink.emit(Diagnostic::MarkerTable {
            dimension: CellDimension::Cell0D,
            entries: mesh.cell0d_markers().to_table(),
        });

        let records = load_cell1ds(&cell1d_path, mesh)?;
        sink.emit(Diagnostic::Loaded {
            dimension: CellDimension::Cell1D,
            path: cell1d_path,
            records,
        });
        sink.emit(Diagnostic::MarkerTable {
            dimension: CellDimension::Cell1D,
            entries: mesh.cell1d_markers().to_table(),
        });

        let records = load_cell2ds(&cell2d_path, mesh)?;
        sink.emit(Diagnostic::Loaded {
            dimension: CellDimension::Cell2D,
            path: cell2d_path,
            records,
        });

        if self.options.check_invariants {
            mesh.validate_invariants()?;
        } else {
            mesh.debug_assert_invariants();
        }

        if self.options.validate_geometry {
            let polygons = validate_mesh_geometry(mesh, self.options.tolerance)?;
            sink.emit(Diagnostic::Validated { polygons });
        }
        Ok(())
    }
}

/// Imports the mesh under `dir` into `mesh` with default options.
///
/// Diagnostics go to the `log` facade; the return value is the only
/// success signal.
pub fn import_mesh(dir: impl AsRef<Path>, mesh: &mut PolygonalMesh) -> bool {
    MeshImporter::default()
        .import_into(dir.as_ref(), mesh, &mut LogSink)
        .is_ok()
}
