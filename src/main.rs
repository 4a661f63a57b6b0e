//! mnaprint - MNA system viewer
//!
//! Prints a saved MNA system as bracketed text blocks.
//!
//! # Usage
//!
//! ```bash
//! mnaprint system.mna
//! mnaprint system.mna --view knowns --no-headers
//! MNAPRINT_LOG=debug mnaprint system.mna --no-color
//! ```

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use mna_print::{
    dsl,
    error::Result,
    format::{knowns_format, matrix_format, mna_format_source, unknowns_format},
    print::write_text,
    MnaSnapshot,
};

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// A, x and z side by side
    Composite,
    /// Coefficient matrix A only
    Matrix,
    /// Knowns vector z only
    Knowns,
    /// Unknowns vector x only
    Unknowns,
}

/// MNA matrix viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the snapshot file
    #[arg(value_name = "SNAPSHOT_FILE")]
    snapshot_file: PathBuf,

    /// Part of the system to print
    #[arg(short, long, value_enum, default_value_t = View::Composite)]
    view: View,

    /// Disable ANSI colors in the composite view
    #[arg(long)]
    no_color: bool,

    /// Omit the "== Begin/End ==" lines around single blocks
    #[arg(long)]
    no_headers: bool,
}

fn render(snapshot: &MnaSnapshot, args: &Args) -> String {
    let headers = !args.no_headers;
    match args.view {
        View::Composite => mna_format_source(snapshot, !args.no_color),
        View::Matrix => snapshot
            .matrix
            .as_ref()
            .map(|m| matrix_format(m, headers))
            .unwrap_or_default(),
        View::Knowns => snapshot
            .knowns
            .as_ref()
            .map(|z| knowns_format(z, headers))
            .unwrap_or_default(),
        View::Unknowns => unknowns_format(snapshot.unknowns.as_ref(), headers),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MNAPRINT_LOG", "warn"))
        .init();

    let args = Args::parse();

    // Load the saved system
    let snapshot = dsl::parse_file(&args.snapshot_file)?;

    let text = render(&snapshot, &args);
    if text.is_empty() {
        log::warn!(
            "nothing to show for {:?} view of '{}'",
            args.view,
            args.snapshot_file.display()
        );
    }

    write_text(&mut io::stdout().lock(), &text)
}
