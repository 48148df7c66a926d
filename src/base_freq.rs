//! Base frequencies of the first record of a FASTA file.
//!
//! file -> fasta shape -> first record -> cleaning -> counts -> report.
//! every stage fails with its own [`BaseFreqError`] so the printed message
//! tells exactly what went wrong.

use std::{io::Write, path::Path};

use thiserror::Error;

use crate::{
    collections_ext::counter::Counter,
    dna::{clean_sequence, VALID_BASES},
    fasta::{self, FastaError},
    utils::round_to,
};

#[derive(Debug, Error)]
pub enum BaseFreqError {
    #[error(transparent)]
    Fasta(#[from] FastaError),

    #[error("Error: la secuencia no contiene bases válidas (A,T,G,C).")]
    NoValidBases,
}

/// per base counts of a cleaned (A/T/G/C only) sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCounts {
    counts: Counter<char>,
    total: usize,
}

impl BaseCounts {
    pub fn from_sequence(seq: &str) -> Self {
        let counts = seq.chars().collect::<Counter<char>>();
        let total = seq.chars().count();
        Self { counts, total }
    }

    pub fn get(&self, base: char) -> usize {
        self.counts.get(&base)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// percentage of `base` over total, 2 decimals. 0 for an empty sequence
    pub fn percentage(&self, base: char) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round_to((self.get(base) as f64 / self.total as f64) * 100.0, 2)
    }
}

/// `50.0`, `33.33`, `100.0`
fn format_percentage(pct: f64) -> String {
    format!("{:?}", pct)
}

pub fn invalid_char_advisory(ch: char, header: &str) -> String {
    format!(
        "Aviso: caracter inválido '{}' ignorado en la secuencia '{}'",
        ch, header
    )
}

pub fn print_results<W: Write>(
    out: &mut W,
    header: &str,
    counts: &BaseCounts,
) -> std::io::Result<()> {
    writeln!(out, "Encabezado: {}", header)?;
    writeln!(out, "Longitud secuencia válida: {}", counts.total())?;
    writeln!(out, "Frecuencias:")?;
    for base in VALID_BASES {
        writeln!(
            out,
            "{}: {} ({}%)",
            base,
            counts.get(base),
            format_percentage(counts.percentage(base))
        )?;
    }
    Ok(())
}

/// whole pipeline. advisories and the report (or the error message) go to `out`.
/// returns the process exit code: 0 ok, 1 any failure
pub fn run<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> anyhow::Result<i32> {
    let record = match fasta::read_single_fasta(path) {
        Ok(record) => record,
        Err(err) => return report_failure(out, err.into()),
    };
    let cleaned = clean_sequence(&record.sequence);

    for ch in cleaned.invalid.iter() {
        writeln!(out, "{}", invalid_char_advisory(*ch, &record.header))?;
    }

    if cleaned.sequence.is_empty() {
        return report_failure(out, BaseFreqError::NoValidBases);
    }

    let counts = BaseCounts::from_sequence(&cleaned.sequence);
    tracing::debug!(
        "{}: {} valid bases, {} invalid symbols",
        record.header,
        counts.total(),
        cleaned.invalid.len()
    );
    print_results(out, &record.header, &counts)?;
    Ok(0)
}

fn report_failure<W: Write>(out: &mut W, err: BaseFreqError) -> anyhow::Result<i32> {
    tracing::debug!("base frequency failed: {:?}", err);
    writeln!(out, "{}", err)?;
    Ok(1)
}
