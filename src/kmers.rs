use std::{collections::BTreeSet, io::Write};

use clap::ValueEnum;
use thiserror::Error;

use crate::{collections_ext::counter::Counter, dna::is_valid_base, itertools::kmer_windows};

pub const DEFAULT_KMER_SIZE: i64 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KmerError {
    #[error("La secuencia no puede ser nula")]
    NullSequence,

    #[error("La secuencia está vacía después de eliminar espacios")]
    EmptySequence,

    /// offending symbols, deduplicated and sorted
    #[error(
        "La secuencia contiene caracteres inválidos: {}. Solo se permiten A, T, C, G.",
        join_symbols(.0)
    )]
    InvalidCharacters(Vec<char>),

    #[error("k debe ser un entero positivo")]
    NonPositiveK,

    #[error("k no puede ser mayor que la longitud de la secuencia")]
    KTooLarge,
}

fn join_symbols(symbols: &[char]) -> String {
    symbols
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// count descending, then k-mer ascending
    #[default]
    Count,
    /// k-mer ascending
    Kmer,
}

/// strip whitespace, uppercase, and accept only A/T/C/G
pub fn validate_sequence(seq: Option<&str>) -> Result<String, KmerError> {
    let seq = seq.ok_or(KmerError::NullSequence)?;

    let normalized = seq
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if normalized.is_empty() {
        return Err(KmerError::EmptySequence);
    }

    let invalid = normalized
        .chars()
        .filter(|c| !is_valid_base(*c))
        .collect::<BTreeSet<char>>();
    if !invalid.is_empty() {
        return Err(KmerError::InvalidCharacters(invalid.into_iter().collect()));
    }

    Ok(normalized)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerCounts {
    k: usize,
    counts: Counter<String>,
}

impl KmerCounts {
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn get(&self, kmer: &str) -> usize {
        self.counts.get(&kmer.to_string())
    }

    /// number of distinct k-mers
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// number of windows, len(seq) - k + 1
    pub fn total(&self) -> usize {
        self.counts.total()
    }

    pub fn sorted(&self, order: SortOrder) -> Vec<(&str, usize)> {
        let items = match order {
            SortOrder::Count => self.counts.mostcommon(self.counts.len()),
            SortOrder::Kmer => self.counts.sorted_by_key(),
        };
        items
            .into_iter()
            .map(|(kmer, count)| (kmer.as_str(), count))
            .collect()
    }

    pub fn into_map(self) -> std::collections::HashMap<String, usize> {
        self.counts.into_map()
    }
}

/// count every overlapping k-mer of a validated sequence.
///
/// `seq` must be ASCII, as returned by [`validate_sequence`]: lengths and windows are taken
/// over bytes
pub fn count_kmers(seq: &str, k: i64) -> Result<KmerCounts, KmerError> {
    debug_assert!(seq.is_ascii(), "count_kmers expects a validated ASCII sequence");
    if k <= 0 {
        return Err(KmerError::NonPositiveK);
    }
    let k = k as usize;
    let seq = seq.as_bytes();
    if k > seq.len() {
        return Err(KmerError::KTooLarge);
    }

    let counts = kmer_windows(seq.len(), k)
        .map(|(start, end)| String::from_utf8_lossy(&seq[start..end]).into_owned())
        .collect::<Counter<String>>();
    tracing::debug!(
        "k={}: {} windows, {} distinct k-mers",
        k,
        counts.total(),
        counts.len()
    );

    Ok(KmerCounts { k, counts })
}

/// `kmer\tcount`, one per line
pub fn print_kmers<W: Write>(
    out: &mut W,
    counts: &KmerCounts,
    order: SortOrder,
) -> std::io::Result<()> {
    for (kmer, count) in counts.sorted(order) {
        writeln!(out, "{}\t{}", kmer, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::{count_kmers, print_kmers, validate_sequence, KmerError, SortOrder};

    fn as_map(items: &[(&str, usize)]) -> HashMap<String, usize> {
        items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_validate_sequence_normalizes() {
        assert_eq!(validate_sequence(Some(" a t c g ")), Ok("ATCG".to_string()));
        assert_eq!(validate_sequence(Some("at\tcg\n")), Ok("ATCG".to_string()));
    }

    #[test]
    fn test_validate_sequence_rejects_invalid_chars() {
        let err = validate_sequence(Some("ATXG")).unwrap_err();
        assert_eq!(err, KmerError::InvalidCharacters(vec!['X']));

        let err = validate_sequence(Some("zatxgnx")).unwrap_err();
        assert_eq!(err, KmerError::InvalidCharacters(vec!['N', 'X', 'Z']));
        assert_eq!(
            err.to_string(),
            "La secuencia contiene caracteres inválidos: N,X,Z. Solo se permiten A, T, C, G."
        );
    }

    #[test]
    fn test_validate_sequence_empty_and_none() {
        assert_eq!(validate_sequence(Some("")), Err(KmerError::EmptySequence));
        assert_eq!(validate_sequence(Some(" \t\n")), Err(KmerError::EmptySequence));
        assert_eq!(validate_sequence(None), Err(KmerError::NullSequence));
    }

    #[test]
    fn test_count_kmers_overlapping() {
        let seq = validate_sequence(Some("ATCGATCGA")).unwrap();
        let counts = count_kmers(&seq, 3).unwrap();
        assert_eq!(counts.get("ATC"), 2);
        assert_eq!(counts.get("TCG"), 2);
        assert_eq!(counts.get("CGA"), 2);
        assert_eq!(counts.get("GAT"), 1);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.total(), seq.len() - 3 + 1);
    }

    #[test]
    fn test_count_kmers_k_equals_len() {
        let counts = count_kmers("ATCG", 4).unwrap();
        assert_eq!(counts.into_map(), as_map(&[("ATCG", 1)]));
    }

    #[test]
    fn test_count_kmers_k_one() {
        let counts = count_kmers("ATCGAT", 1).unwrap();
        assert_eq!(
            counts.into_map(),
            as_map(&[("A", 2), ("T", 2), ("C", 1), ("G", 1)])
        );
    }

    #[test]
    fn test_count_kmers_identical_bases() {
        let counts = count_kmers("AAAA", 2).unwrap();
        assert_eq!(counts.into_map(), as_map(&[("AA", 3)]));
    }

    #[test]
    fn test_count_kmers_invalid_k() {
        assert_eq!(count_kmers("ATCG", 0), Err(KmerError::NonPositiveK));
        assert_eq!(count_kmers("ATCG", -1), Err(KmerError::NonPositiveK));
        assert_eq!(count_kmers("ATCG", 5), Err(KmerError::KTooLarge));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "validated ASCII")]
    fn test_count_kmers_rejects_unvalidated_input() {
        let _ = count_kmers("ÁTCG", 2);
    }

    #[test]
    fn test_sort_orders() {
        let counts = count_kmers("ATCGATCGA", 3).unwrap();
        assert_eq!(
            counts.sorted(SortOrder::Count),
            vec![("ATC", 2), ("CGA", 2), ("TCG", 2), ("GAT", 1)]
        );
        assert_eq!(
            counts.sorted(SortOrder::Kmer),
            vec![("ATC", 2), ("CGA", 2), ("GAT", 1), ("TCG", 2)]
        );
    }

    #[test]
    fn test_print_kmers() {
        let counts = count_kmers("AAAT", 2).unwrap();
        let mut out = Vec::new();
        print_kmers(&mut out, &counts, SortOrder::Count).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "AA\t2\nAT\t1\n");
    }
}
