use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use dnakits::{expression, utils};

/// Filtra genes por expresión usando un archivo TSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Archivo TSV con columnas 'gene' y 'expression'.
    file: PathBuf,

    /// Umbral mínimo de expresión (ej. 10.5).
    #[arg(short, long, default_value_t = expression::DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    threshold: f64,
}

fn main() -> anyhow::Result<()> {
    utils::init_logging();
    let args = Args::parse();
    tracing::debug!("cmd: {}", utils::command_line_str());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = expression::run(&args.file, args.threshold, &mut out) {
        out.flush()?;
        eprintln!("{}", err);
        process::exit(1);
    }
    Ok(())
}
