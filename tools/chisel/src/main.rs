//! ChiselForge CLI.
//!
//! Replays a sculpting script against a seed mesh and writes the result as
//! an OBJ file:
//!
//! ```text
//! chisel carve.txt                          # cube seed -> out.obj
//! chisel carve.txt --seed tetrahedron
//! chisel carve.txt --seed scan.obj -o carved.obj
//! ```
//!
//! Malformed script lines are skipped (and reported in the summary); a
//! missing script or seed file is fatal and exits nonzero.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chisel_script::Session;
use mesh_io::{load_obj, save_obj};
use mesh_types::{seeds, Shape};

/// Replay a sculpting script against a seed mesh.
#[derive(Parser)]
#[command(name = "chisel")]
#[command(about = "Script-driven mesh editing", long_about = None)]
#[command(version)]
struct Cli {
    /// Script file to replay, one command per line
    script: PathBuf,

    /// Seed mesh: "cube", "tetrahedron", or a path to an OBJ file
    #[arg(long, default_value = "cube")]
    seed: String,

    /// Output OBJ path
    #[arg(short, long, default_value = "out.obj")]
    output: PathBuf,
}

/// Resolve the seed argument into a starting shape.
fn seed_shape(seed: &str) -> Result<Shape> {
    match seed {
        "cube" => Ok(seeds::cube()),
        "tetrahedron" => Ok(seeds::tetrahedron(0.5)),
        path => load_obj(path).with_context(|| format!("loading seed mesh {path}")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let shape = seed_shape(&cli.seed)?;
    info!(
        seed = %cli.seed,
        vertices = shape.vertex_count(),
        faces = shape.face_count(),
        "seed shape ready"
    );

    let script = File::open(&cli.script)
        .with_context(|| format!("opening script {}", cli.script.display()))?;

    let mut session = Session::new(shape);
    let stats = session
        .run(BufReader::new(script))
        .context("replaying script")?;

    save_obj(&session.shape, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    println!(
        "{} commands executed, {} skipped; wrote {} vertices / {} faces to {}",
        stats.executed,
        stats.skipped,
        session.shape.vertex_count(),
        session.shape.face_count(),
        cli.output.display()
    );

    Ok(())
}
