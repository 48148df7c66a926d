//! Gene expression table filter.
//!
//! Input is a tab separated table with a header row holding (at least) the
//! columns `gene` and `expression`. Expression cells that do not parse as a
//! number are dropped without complaint; this soft validation is the
//! expected behavior, not an oversight.

use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

use csv::ReaderBuilder;
use thiserror::Error;

pub const GENE_COLUMN: &str = "gene";
pub const EXPRESSION_COLUMN: &str = "expression";
pub const DEFAULT_THRESHOLD: f64 = 0.0;

#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("El archivo debe tener columnas 'gene' y 'expression'.")]
    MissingColumns,

    #[error("Error al leer el archivo: {0}")]
    Io(#[from] io::Error),

    #[error("Error al leer la tabla: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneExpression {
    pub gene: String,
    pub expression: f64,
}

fn parse_expression(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

pub fn read_expression_table<R: Read>(
    reader: R,
) -> Result<Vec<GeneExpression>, ExpressionError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let gene_idx = headers.iter().position(|h| h == GENE_COLUMN);
    let expr_idx = headers.iter().position(|h| h == EXPRESSION_COLUMN);
    let (gene_idx, expr_idx) = match (gene_idx, expr_idx) {
        (Some(gene_idx), Some(expr_idx)) => (gene_idx, expr_idx),
        _ => return Err(ExpressionError::MissingColumns),
    };

    let mut rows = vec![];
    let mut dropped = 0_usize;
    for record in reader.records() {
        let record = record?;
        match record.get(expr_idx).and_then(parse_expression) {
            Some(expression) => rows.push(GeneExpression {
                gene: record.get(gene_idx).unwrap_or_default().to_string(),
                expression,
            }),
            None => dropped += 1,
        }
    }
    tracing::debug!(
        "expression table: {} rows kept, {} non numeric rows dropped",
        rows.len(),
        dropped
    );

    Ok(rows)
}

pub fn load_expression_table<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<GeneExpression>, ExpressionError> {
    let file = File::open(path.as_ref())?;
    read_expression_table(file)
}

/// rows with expression >= threshold, ordered by gene name
pub fn filter_genes(rows: Vec<GeneExpression>, threshold: f64) -> Vec<GeneExpression> {
    let mut filtered = rows
        .into_iter()
        .filter(|row| row.expression >= threshold)
        .collect::<Vec<_>>();
    filtered.sort_by(|a, b| a.gene.cmp(&b.gene));
    filtered
}

pub fn print_genes<W: Write>(out: &mut W, filtered: &[GeneExpression]) -> io::Result<()> {
    if filtered.is_empty() {
        writeln!(out, "No se encontraron genes por encima del threshold.")?;
        return Ok(());
    }

    writeln!(out, "Genes filtrados:")?;
    for row in filtered {
        writeln!(out, "{}", row.gene)?;
    }
    Ok(())
}

pub fn run<P: AsRef<Path>, W: Write>(
    path: P,
    threshold: f64,
    out: &mut W,
) -> anyhow::Result<()> {
    let rows = load_expression_table(path)?;
    let filtered = filter_genes(rows, threshold);
    print_genes(out, &filtered)?;
    Ok(())
}
