use bio::alphabets::Alphabet;
use lazy_static::lazy_static;
use thiserror::Error;

use crate::utils::round_to;

/// the only symbols that survive cleaning. order used for reports
pub const VALID_BASES: [char; 4] = ['A', 'T', 'G', 'C'];

pub const DEFAULT_AT_PRECISION: u32 = 2;

lazy_static! {
    static ref DNA_ALPHABET: Alphabet = Alphabet::new(b"ATGC");
}

/// uppercase A/T/G/C only. lowercase must be normalized by the caller
pub fn is_valid_base(base: char) -> bool {
    base.is_ascii() && DNA_ALPHABET.is_word([base as u8])
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AtContentError {
    #[error("la secuencia está vacía")]
    EmptySequence,
}

/// AT content of `dna`, rounded (ties to even) to `sig_figs` decimals, default 2.
///
/// A and T count toward the numerator, A/T/G/C toward the denominator.
/// ambiguity codes (N, R, ...) and any other symbol are ignored, so a
/// sequence with no A/T/G/C at all ("NNN") has no A/T and yields 0.0.
///
/// get_at_content("ATGNNNC", Some(1)) == 0.5
pub fn get_at_content(dna: &str, sig_figs: Option<u32>) -> Result<f64, AtContentError> {
    if dna.is_empty() {
        return Err(AtContentError::EmptySequence);
    }
    let sig_figs = sig_figs.unwrap_or(DEFAULT_AT_PRECISION);

    let dna = dna.to_uppercase();
    let (at, called) = dna
        .chars()
        .filter(|base| is_valid_base(*base))
        .fold((0_usize, 0_usize), |(at, called), base| match base {
            'A' | 'T' => (at + 1, called + 1),
            _ => (at, called + 1),
        });

    if called == 0 {
        return Ok(0.0);
    }

    Ok(round_to(at as f64 / called as f64, sig_figs))
}

/// result of [`clean_sequence`]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanedSequence {
    pub sequence: String,
    /// uppercased, in encounter order, duplicates kept
    pub invalid: Vec<char>,
}

/// uppercase `seq` and split it into valid bases and everything else.
/// whitespace and line breaks land in `invalid` too
pub fn clean_sequence(seq: &str) -> CleanedSequence {
    let mut cleaned = CleanedSequence::default();
    for base in seq.to_uppercase().chars() {
        if is_valid_base(base) {
            cleaned.sequence.push(base);
        } else {
            cleaned.invalid.push(base);
        }
    }
    cleaned
}

#[cfg(test)]
mod test {
    use super::{clean_sequence, get_at_content, is_valid_base, AtContentError};

    #[test]
    fn test_at_content_precision() {
        assert_eq!(get_at_content("ATGNNNC", Some(1)), Ok(0.5));
        assert_eq!(get_at_content("ATGCGCATTAAGC", Some(3)), Ok(0.538));
        assert_eq!(get_at_content("ATGCGCATTAAGC", None), Ok(0.54));
    }

    #[test]
    fn test_at_content_bounds() {
        assert_eq!(get_at_content("AATTtaAT", None), Ok(1.0));
        assert_eq!(get_at_content("gcGCGGC", None), Ok(0.0));
        assert_eq!(get_at_content("atgc", Some(4)), Ok(0.5));
    }

    #[test]
    fn test_at_content_errors() {
        assert_eq!(get_at_content("", None), Err(AtContentError::EmptySequence));
    }

    #[test]
    fn test_at_content_without_called_bases() {
        assert_eq!(get_at_content("NNN", None), Ok(0.0));
        assert_eq!(get_at_content("nrY-", Some(2)), Ok(0.0));
        assert_eq!(get_at_content("GCN", None), Ok(0.0));
        assert_eq!(get_at_content("ATNN", None), Ok(1.0));
    }

    #[test]
    fn test_at_content_rounds_like_decimal_text() {
        // 0.05 is stored slightly above the tie
        assert_eq!(get_at_content(&format!("A{}", "G".repeat(19)), Some(1)), Ok(0.1));
    }

    #[test]
    fn test_is_valid_base() {
        assert!("ATGC".chars().all(is_valid_base));
        assert!(!is_valid_base('a'));
        assert!(!is_valid_base('N'));
        assert!(!is_valid_base('é'));
    }

    #[test]
    fn test_clean_sequence() {
        let cleaned = clean_sequence("aTgNxyz \n");
        assert_eq!(cleaned.sequence, "ATG");
        assert_eq!(cleaned.invalid, vec!['N', 'X', 'Y', 'Z', ' ', '\n']);

        let cleaned = clean_sequence("NnAn");
        assert_eq!(cleaned.sequence, "A");
        assert_eq!(cleaned.invalid, vec!['N', 'N', 'N']);
    }
}
