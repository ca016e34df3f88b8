// ==============================================================================
// consensus.rs - Genotype to IUPAC Consensus Encoding
// ==============================================================================
// Description: Collapses diploid genotype calls into single ambiguity codes
// Author: Matt Barham
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================
// Algorithm (per cell):
//   - Missing cell, "./.", ".|." or any cell containing "." → missing
//   - Exactly "X/Y" or "X|Y" with X, Y in {A,C,G,T} → lowercase IUPAC code
//     (e.g., A/T → w, C|G → s, T/T → t)
//   - Anything else → passed through unchanged
//   - Missing → "n" when na_to_n is set, otherwise left missing
// ==============================================================================

use crate::iupac::{ambiguity_code, Base};
use crate::models::{ConsensusOptions, GenotypeCell, GenotypeMatrix, Separator};
use tracing::debug;

/// Code written in place of missing cells when `na_to_n` is set
pub const MISSING_CODE: &str = "n";

/// Encode a single genotype cell
///
/// # Arguments
/// * `cell` - Genotype string (e.g., "A/T"), or `None` for a missing cell
/// * `options` - Separator handling and missing-value policy
///
/// # Returns
/// * `Some(code)` - Ambiguity code, "n" for missing, or the input unchanged
/// * `None` - Missing cell and `na_to_n` is false
///
/// # Examples
/// ```
/// use genotype_consensus::consensus::encode_genotype;
/// use genotype_consensus::models::ConsensusOptions;
///
/// let options = ConsensusOptions::default();
///
/// assert_eq!(encode_genotype(Some("A/T"), &options).as_deref(), Some("w"));
/// assert_eq!(encode_genotype(Some("C|C"), &options).as_deref(), Some("c"));
/// assert_eq!(encode_genotype(Some("A/."), &options).as_deref(), Some("n"));
/// assert_eq!(encode_genotype(Some("N/N"), &options).as_deref(), Some("N/N"));
///
/// let keep_missing = options.with_na_to_n(false);
/// assert_eq!(encode_genotype(Some("./."), &keep_missing), None);
/// ```
pub fn encode_genotype(cell: Option<&str>, options: &ConsensusOptions) -> Option<String> {
    classify(cell, options).finish(options)
}

/// Encode every cell of a genotype matrix, keeping its shape
///
/// # Examples
/// ```
/// use genotype_consensus::consensus::alleles_to_consensus;
/// use genotype_consensus::models::{ConsensusOptions, GenotypeMatrix};
///
/// let matrix = GenotypeMatrix::column(vec!["A/A", "A/T", "./."]);
/// let encoded = alleles_to_consensus(&matrix, &ConsensusOptions::default());
///
/// assert_eq!(
///     encoded.into_cells(),
///     vec![Some("a".to_string()), Some("w".to_string()), Some("n".to_string())]
/// );
/// ```
pub fn alleles_to_consensus<T: GenotypeCell>(
    matrix: &GenotypeMatrix<T>,
    options: &ConsensusOptions,
) -> GenotypeMatrix<Option<String>> {
    let mut stats = EncodeStats::default();
    let encoded = matrix.map(|cell| stats.encode(cell.genotype(), options));

    debug!(
        "Encoded {}x{} genotype matrix: {} coded, {} missing, {} passed through",
        matrix.nrow(),
        matrix.ncol(),
        stats.coded,
        stats.missing,
        stats.passed_through
    );

    encoded
}

/// Encode a genotype vector element by element
pub fn alleles_to_consensus_vec<T: GenotypeCell>(
    genotypes: &[T],
    options: &ConsensusOptions,
) -> Vec<Option<String>> {
    let mut stats = EncodeStats::default();
    let encoded: Vec<Option<String>> = genotypes
        .iter()
        .map(|cell| stats.encode(cell.genotype(), options))
        .collect();

    debug!(
        "Encoded {} genotypes: {} coded, {} missing, {} passed through",
        genotypes.len(),
        stats.coded,
        stats.missing,
        stats.passed_through
    );

    encoded
}

/// Encode a matrix and join each row into one consensus sequence
///
/// Missing cells are written as "n" whatever `na_to_n` says, so every row
/// yields a sequence of the same length when all cells are well formed.
///
/// # Examples
/// ```
/// use genotype_consensus::consensus::consensus_sequences;
/// use genotype_consensus::models::{ConsensusOptions, GenotypeMatrix};
///
/// let matrix = GenotypeMatrix::from_rows(vec![
///     vec!["A/A", "C/T", "G|G"],
///     vec!["A/G", "./.", "T/T"],
/// ])
/// .unwrap();
///
/// let sequences = consensus_sequences(&matrix, &ConsensusOptions::default());
/// assert_eq!(sequences, vec!["ayg".to_string(), "rnt".to_string()]);
/// ```
pub fn consensus_sequences<T: GenotypeCell>(
    matrix: &GenotypeMatrix<T>,
    options: &ConsensusOptions,
) -> Vec<String> {
    let encoded = alleles_to_consensus(matrix, options);

    encoded
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_deref().unwrap_or(MISSING_CODE))
                .collect::<String>()
        })
        .collect()
}

/// Outcome of encoding one cell, before the missing-value policy applies
enum Encoded<'a> {
    Coded(char),
    Missing,
    PassThrough(&'a str),
}

impl Encoded<'_> {
    fn finish(self, options: &ConsensusOptions) -> Option<String> {
        match self {
            Encoded::Coded(code) => Some(code.to_string()),
            Encoded::PassThrough(genotype) => Some(genotype.to_string()),
            Encoded::Missing if options.na_to_n => Some(MISSING_CODE.to_string()),
            Encoded::Missing => None,
        }
    }
}

fn classify<'a>(cell: Option<&'a str>, options: &ConsensusOptions) -> Encoded<'a> {
    match cell {
        None => Encoded::Missing,
        // covers "./.", ".|." and half calls such as "A/."
        Some(genotype) if genotype.contains('.') => Encoded::Missing,
        Some(genotype) => match pair_code(genotype, options) {
            Some(code) => Encoded::Coded(code),
            None => Encoded::PassThrough(genotype),
        },
    }
}

/// Ambiguity code for an exact "X<sep>Y" genotype, if it is one
fn pair_code(genotype: &str, options: &ConsensusOptions) -> Option<char> {
    let mut chars = genotype.chars();
    let (allele1, sep, allele2) = (chars.next()?, chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    let sep = Separator::from_char(sep)?;
    if !options.accepts(sep) {
        return None;
    }

    Some(ambiguity_code(
        Base::from_char(allele1)?,
        Base::from_char(allele2)?,
    ))
}

#[derive(Default)]
struct EncodeStats {
    coded: usize,
    missing: usize,
    passed_through: usize,
}

impl EncodeStats {
    fn encode(&mut self, cell: Option<&str>, options: &ConsensusOptions) -> Option<String> {
        let encoded = classify(cell, options);
        match encoded {
            Encoded::Coded(_) => self.coded += 1,
            Encoded::Missing => self.missing += 1,
            Encoded::PassThrough(_) => self.passed_through += 1,
        }
        encoded.finish(options)
    }
}
