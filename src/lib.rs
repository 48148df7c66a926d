pub mod base_freq;
pub mod collections_ext;
pub mod dna;
pub mod expression;
pub mod fasta;
pub mod itertools;
pub mod kmers;
pub mod rps;
pub mod utils;
