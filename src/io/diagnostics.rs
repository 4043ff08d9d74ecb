//! Structured diagnostics emitted while importing a mesh.
//!
//! The importer never prints. It hands [`Diagnostic`] values to a
//! [`DiagnosticSink`], and the caller decides how they are presented:
//! [`LogSink`] forwards them to the `log` facade, a `Vec<Diagnostic>`
//! simply collects them.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::mesh_error::MeshImportError;
use crate::topology::markers::write_marker_line;

/// Cell dimension a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CellDimension {
    Cell0D,
    Cell1D,
    Cell2D,
}

impl fmt::Display for CellDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellDimension::Cell0D => "Cell0D",
            CellDimension::Cell1D => "Cell1D",
            CellDimension::Cell2D => "Cell2D",
        };
        f.write_str(name)
    }
}

/// A single import event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Diagnostic {
    /// A table was read successfully.
    Loaded {
        dimension: CellDimension,
        path: PathBuf,
        records: usize,
    },
    /// Marker buckets after a point or edge table was loaded.
    MarkerTable {
        dimension: CellDimension,
        entries: Vec<(u32, Vec<u32>)>,
    },
    /// Every polygon passed geometric validation.
    Validated { polygons: usize },
    /// The import stopped on this error.
    #[serde(serialize_with = "serialize_error")]
    Failed(MeshImportError),
}

fn serialize_error<S>(err: &MeshImportError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&err.to_string())
}

impl Diagnostic {
    /// True when this diagnostic reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::Failed(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Loaded {
                dimension,
                path,
                records,
            } => write!(f, "{dimension}: {records} records from {}", path.display()),
            Diagnostic::MarkerTable { dimension, entries } => {
                write!(f, "{dimension} marker:")?;
                for (marker, ids) in entries {
                    writeln!(f)?;
                    write_marker_line(f, *marker, ids)?;
                }
                Ok(())
            }
            Diagnostic::Validated { polygons } => {
                write!(f, "{polygons} polygons passed geometric validation")
            }
            Diagnostic::Failed(err) => write!(f, "import failed: {err}"),
        }
    }
}

/// Receiver for import diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Forwards diagnostics to the `log` facade.
///
/// Marker tables are logged at `info`, load and validation events at
/// `debug`, failures at `error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Failed(_) => log::error!("{diagnostic}"),
            Diagnostic::MarkerTable { .. } => log::info!("{diagnostic}"),
            Diagnostic::Loaded { .. } | Diagnostic::Validated { .. } => {
                log::debug!("{diagnostic}")
            }
        }
    }
}

/// Diagnostics collected over one import, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ImportReport {
    /// Marker table recorded for `dimension`, if any.
    pub fn marker_table(&self, dimension: CellDimension) -> Option<&[(u32, Vec<u32>)]> {
        self.diagnostics.iter().find_map(|d| match d {
            Diagnostic::MarkerTable {
                dimension: dim,
                entries,
            } if *dim == dimension => Some(entries.as_slice()),
            _ => None,
        })
    }

    /// The failure that ended the import, if any.
    pub fn failure(&self) -> Option<&MeshImportError> {
        self.diagnostics.iter().find_map(|d| match d {
            Diagnostic::Failed(err) => Some(err),
            _ => None,
        })
    }
}

impl DiagnosticSink for ImportReport {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_table_renders_like_the_console_listing() {
        let d = Diagnostic::MarkerTable {
            dimension: CellDimension::Cell0D,
            entries: vec![(1, vec![0, 4]), (3, vec![2])],
        };
        assert_eq!(
            d.to_string(),
            "Cell0D marker:\nkey:\t1\t values:\t0\t4\nkey:\t3\t values:\t2"
        );
    }

    #[test]
    fn marker_table_lines_match_marker_index_display() {
        use crate::topology::markers::MarkerIndex;

        let mut idx = MarkerIndex::new();
        for (marker, id) in [(2, 5), (2, 2), (6, 1), (2, 9)] {
            idx.insert(marker, id);
        }
        let d = Diagnostic::MarkerTable {
            dimension: CellDimension::Cell1D,
            entries: idx.to_table(),
        };
        assert_eq!(d.to_string(), format!("Cell1D marker:\n{}", idx.to_string().trim_end()));
    }

    #[test]
    fn report_finds_tables_and_failures() {
        let mut report = ImportReport::default();
        report.emit(Diagnostic::MarkerTable {
            dimension: CellDimension::Cell1D,
            entries: vec![(2, vec![5, 2, 9])],
        });
        assert!(report.failure().is_none());
        report.emit(Diagnostic::Failed(MeshImportError::DegenerateArea {
            polygon: 4,
            area: 0.0,
        }));
        assert_eq!(
            report.marker_table(CellDimension::Cell1D),
            Some(&[(2, vec![5, 2, 9])][..])
        );
        assert!(report.marker_table(CellDimension::Cell0D).is_none());
        assert!(report.diagnostics[1].is_error());
        assert!(matches!(
            report.failure(),
            Some(MeshImportError::DegenerateArea { polygon: 4, .. })
        ));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = ImportReport {
            diagnostics: vec![Diagnostic::Validated { polygons: 2 }],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"diagnostics":[{"Validated":{"polygons":2}}]}"#);
    }
}
