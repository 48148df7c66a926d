//! Simple k-mer counter.
//!
//! ```bash
//! k_mers ATCGATCGA -k 3
//! ```
//!
//! prints `kmer<TAB>count`, by count (descending) then k-mer, or by k-mer with `--sort kmer`.

use std::io;

use clap::{error::ErrorKind, CommandFactory, Parser};
use dnakits::{
    kmers::{self, KmerCounts, SortOrder, DEFAULT_KMER_SIZE},
    utils,
};

/// Contar k-mers en una secuencia de ADN (solo A/T/C/G permitidos).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Secuencia de ADN como argumento posicional (p.ej., ATCGTT)
    sequence: String,

    /// Tamaño del k-mer (entero positivo).
    #[arg(short = 'k', long = "kmer_size", default_value_t = DEFAULT_KMER_SIZE, allow_negative_numbers = true)]
    kmer_size: i64,

    /// Ordenar por 'count' (descendente) y luego por kmer o por 'kmer' (lexicográfico).
    #[arg(long, value_enum, default_value_t = SortOrder::Count)]
    sort: SortOrder,
}

/// domain failures surface as clap usage errors
fn count(args: &Args) -> Result<KmerCounts, clap::Error> {
    kmers::validate_sequence(Some(args.sequence.as_str()))
        .and_then(|seq| kmers::count_kmers(&seq, args.kmer_size))
        .map_err(|err| Args::command().error(ErrorKind::ValueValidation, err))
}

fn main() -> anyhow::Result<()> {
    utils::init_logging();
    let args = Args::parse();
    tracing::debug!("cmd: {}", utils::command_line_str());

    let counts = count(&args).unwrap_or_else(|err| err.exit());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    kmers::print_kmers(&mut out, &counts, args.sort)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use clap::{error::ErrorKind, Parser};
    use dnakits::kmers::SortOrder;

    use super::{count, Args};

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["k_mers", "ATCGATCGA"]).unwrap();
        assert_eq!(args.sequence, "ATCGATCGA");
        assert_eq!(args.kmer_size, 3);
        assert_eq!(args.sort, SortOrder::Count);
        assert_eq!(count(&args).unwrap().total(), 7);
    }

    #[test]
    fn test_cli_long_flags() {
        let args =
            Args::try_parse_from(["k_mers", "ATCG", "--kmer_size", "2", "--sort", "kmer"]).unwrap();
        assert_eq!(args.kmer_size, 2);
        assert_eq!(args.sort, SortOrder::Kmer);
    }

    #[test]
    fn test_cli_negative_k_reaches_validation() {
        let args = Args::try_parse_from(["k_mers", "ATCG", "-k", "-1"]).unwrap();
        assert_eq!(args.kmer_size, -1);

        let err = count(&args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("k debe ser un entero positivo"));
    }

    #[test]
    fn test_cli_invalid_sequence() {
        let args = Args::try_parse_from(["k_mers", "ATXG"]).unwrap();
        let err = count(&args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("caracteres inválidos: X"));
    }

    #[test]
    fn test_cli_bad_values() {
        let err = Args::try_parse_from(["k_mers", "ATCG", "-k", "three"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Args::try_parse_from(["k_mers", "ATCG", "--sort", "length"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = Args::try_parse_from(["k_mers"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
