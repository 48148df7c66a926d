use std::{fs, io, path::Path};

use thiserror::Error;

pub const RECORD_MARKER: char = '>';

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("Error: el archivo no existe: {0}")]
    FileNotFound(String),

    #[error("Error al leer el archivo: {0}")]
    Io(#[from] io::Error),

    #[error("Error: El archivo no parece estar en formato FASTA.")]
    NotFasta,

    #[error("Error: FASTA vacío o sin secuencia válida.")]
    EmptyFasta,

    #[error("Error: la secuencia está vacía.")]
    EmptySequence,
}

/// first record of a fasta file. sequence is raw: not uppercased, not validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, FastaError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FastaError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// text between the first marker and the next one (or end of input)
fn first_record_body(content: &str) -> Result<&str, FastaError> {
    let (_, rest) = content
        .split_once(RECORD_MARKER)
        .ok_or(FastaError::NotFasta)?;
    let body = rest.split(RECORD_MARKER).next().unwrap_or_default();
    if body.trim().is_empty() {
        return Err(FastaError::EmptyFasta);
    }
    Ok(body)
}

pub fn validate_is_fasta(content: &str) -> Result<(), FastaError> {
    first_record_body(content).map(|_| ())
}

/// header: first line of the record, trimmed.
/// sequence: remaining lines joined without separator, then trimmed.
/// anything after the first record is ignored
pub fn parse_single_fasta(content: &str) -> Result<FastaRecord, FastaError> {
    let body = first_record_body(content)?;
    let mut lines = body.trim().split('\n');
    let header = lines.next().unwrap_or_default().trim().to_string();
    let sequence = lines.collect::<String>().trim().to_string();

    if sequence.is_empty() {
        return Err(FastaError::EmptySequence);
    }
    tracing::debug!("fasta record '{}', raw length {}", header, sequence.len());

    Ok(FastaRecord { header, sequence })
}

/// read + validate + parse
pub fn read_single_fasta<P: AsRef<Path>>(path: P) -> Result<FastaRecord, FastaError> {
    let content = read_file(path)?;
    validate_is_fasta(&content)?;
    parse_single_fasta(&content)
}
