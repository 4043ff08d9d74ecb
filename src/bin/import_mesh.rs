//! Command-line front end: import a mesh directory and report the outcome.
//!
//! Marker tables go to stdout, failures to stderr. The exit status is the
//! only success signal.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use polymesh_import::io::diagnostics::{Diagnostic, DiagnosticSink};
use polymesh_import::io::{ImportOptions, MeshImporter};

/// Import a polygonal mesh from Cell0Ds/Cell1Ds/Cell2Ds tables.
#[derive(Parser)]
#[command(name = "import_mesh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Directory holding the three cell tables.
    mesh_dir: PathBuf,

    /// JSON file with import options (table names, tolerance, checks).
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Override the degeneracy tolerance.
    #[arg(long)]
    tolerance: Option<f64>,
}

struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MarkerTable { .. } => println!("{diagnostic}"),
            Diagnostic::Failed(_) => eprintln!("{diagnostic}"),
            _ => log::debug!("{diagnostic}"),
        }
    }
}

fn load_options(cli: &Cli) -> Result<ImportOptions, Box<dyn std::error::Error>> {
    let mut options = match &cli.options {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ImportOptions::default(),
    };
    if let Some(tolerance) = cli.tolerance {
        options.tolerance = tolerance;
    }
    Ok(options)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let options = match load_options(&cli) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return ExitCode::FAILURE;
        }
    };

    match MeshImporter::new(options).import(&cli.mesh_dir, &mut ConsoleSink) {
        Ok(mesh) => {
            println!(
                "imported {} points, {} edges, {} polygons",
                mesh.number_cell0d(),
                mesh.number_cell1d(),
                mesh.number_cell2d()
            );
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
