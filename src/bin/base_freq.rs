//! Base frequencies (A, T, G, C) of a FASTA file holding ONE sequence.
//!
//! ```bash
//! base_freq seq.fasta
//! ```

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use dnakits::{base_freq, utils};

/// Calcula la frecuencia de A, T, G y C de un archivo FASTA con UNA sola secuencia.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Archivo FASTA que contiene una sola secuencia.
    fasta: PathBuf,
}

fn main() -> anyhow::Result<()> {
    utils::init_logging();
    let args = Args::parse();
    tracing::debug!("cmd: {}", utils::command_line_str());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = base_freq::run(&args.fasta, &mut out)?;
    out.flush()?;
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}
