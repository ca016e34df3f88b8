// ==============================================================================
// alleles.rs - Allele Extraction
// ==============================================================================
// Description: Splits genotype strings and returns the unique observed alleles
// Author: Matt Barham
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================
// Algorithm:
//   1. Split every genotype on the delimiter and flatten ("A/C","C/G" → A,C,C,G)
//   2. Optionally drop tokens whose text is "NA"
//   3. Optionally coerce tokens to numbers (unparseable → Missing)
//   4. Deduplicate, keeping first occurrence (A,C,G)
// ==============================================================================

use crate::models::{Allele, AlleleOptions, GenotypeCell};
use std::collections::HashSet;
use tracing::debug;

/// Text removed by `na_rm`
pub const NA_TOKEN: &str = "NA";

/// Return the unique alleles observed across a genotype vector
///
/// # Arguments
/// * `genotypes` - Genotype strings (e.g., "A/C"); `None` cells yield `Missing`
/// * `options` - Delimiter, "NA" removal, and numeric coercion
///
/// # Returns
/// Unique alleles in first-occurrence order. Text tokens unless
/// `as_numeric` is set, in which case every token is `Numeric` or `Missing`.
///
/// # Examples
/// ```
/// use genotype_consensus::alleles::get_alleles;
/// use genotype_consensus::models::{Allele, AlleleOptions};
///
/// let alleles = get_alleles(&["A/C", "C/G"], &AlleleOptions::default());
/// let text: Vec<&str> = alleles.iter().filter_map(Allele::as_text).collect();
/// assert_eq!(text, vec!["A", "C", "G"]);
///
/// let numeric = AlleleOptions::default().with_as_numeric(true);
/// let alleles = get_alleles(&["1/2", "2/3"], &numeric);
/// let values: Vec<f64> = alleles.iter().filter_map(Allele::as_f64).collect();
/// assert_eq!(values, vec![1.0, 2.0, 3.0]);
/// ```
pub fn get_alleles<T: GenotypeCell>(genotypes: &[T], options: &AlleleOptions) -> Vec<Allele> {
    let tokens = split_alleles(genotypes, &options.split);
    let token_count = tokens.len();

    let tokens = tokens
        .into_iter()
        .filter(|token| !(options.na_rm && token.as_text() == Some(NA_TOKEN)));

    let unique = if options.as_numeric {
        unique_alleles(tokens.map(coerce_numeric))
    } else {
        unique_alleles(tokens)
    };

    debug!(
        "Extracted {} unique alleles from {} tokens across {} genotypes",
        unique.len(),
        token_count,
        genotypes.len()
    );

    unique
}

/// Split every genotype on `split` and flatten into one token sequence
///
/// The delimiter is matched literally. An empty genotype yields no tokens,
/// a trailing delimiter does not add an empty token, and an empty `split`
/// breaks the genotype into single characters.
pub fn split_alleles<T: GenotypeCell>(genotypes: &[T], split: &str) -> Vec<Allele> {
    let mut tokens = Vec::with_capacity(genotypes.len() * 2);

    for cell in genotypes {
        match cell.genotype() {
            Some(genotype) => tokens.extend(
                split_genotype(genotype, split)
                    .into_iter()
                    .map(|token| Allele::Text(token.to_string())),
            ),
            None => tokens.push(Allele::Missing),
        }
    }

    tokens
}

fn split_genotype<'a>(genotype: &'a str, split: &str) -> Vec<&'a str> {
    if genotype.is_empty() {
        return Vec::new();
    }

    if split.is_empty() {
        return genotype
            .char_indices()
            .map(|(i, c)| &genotype[i..i + c.len_utf8()])
            .collect();
    }

    let mut tokens: Vec<&str> = genotype.split(split).collect();
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}

fn coerce_numeric(token: Allele) -> Allele {
    match token {
        Allele::Text(text) => match text.trim().parse::<f64>() {
            Ok(value) => Allele::Numeric(value),
            Err(_) => Allele::Missing,
        },
        other => other,
    }
}

/// Hashable identity of an allele value. Numerics compare by value,
/// so 0 and -0 collapse and every NaN is the same NaN.
#[derive(PartialEq, Eq, Hash)]
enum AlleleKey {
    Text(String),
    Numeric(u64),
    Missing,
}

impl From<&Allele> for AlleleKey {
    fn from(allele: &Allele) -> Self {
        match allele {
            Allele::Text(text) => AlleleKey::Text(text.clone()),
            Allele::Numeric(value) if value.is_nan() => AlleleKey::Numeric(f64::NAN.to_bits()),
            Allele::Numeric(value) if *value == 0.0 => AlleleKey::Numeric(0.0f64.to_bits()),
            Allele::Numeric(value) => AlleleKey::Numeric(value.to_bits()),
            Allele::Missing => AlleleKey::Missing,
        }
    }
}

fn unique_alleles(tokens: impl Iterator<Item = Allele>) -> Vec<Allele> {
    let mut seen: HashSet<AlleleKey> = HashSet::new();
    tokens
        .filter(|token| seen.insert(AlleleKey::from(token)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> Vec<Allele> {
        values.iter().map(|v| Allele::Text(v.to_string())).collect()
    }

    #[test]
    fn test_unique_preserves_first_occurrence() {
        let alleles = get_alleles(&["A/A", "C/G"], &AlleleOptions::default());
        assert_eq!(alleles, text(&["A", "C", "G"]));

        let alleles = get_alleles(&["A/C", "C/G"], &AlleleOptions::default());
        assert_eq!(alleles, text(&["A", "C", "G"]));

        let alleles = get_alleles(&["T/G", "A/T", "G/A"], &AlleleOptions::default());
        assert_eq!(alleles, text(&["T", "G", "A"]));
    }

    #[test]
    fn test_na_rm_removes_literal_na() {
        let options = AlleleOptions::default().with_na_rm(true);
        let alleles = get_alleles(&["A/NA", "C/G"], &options);
        assert_eq!(alleles, text(&["A", "C", "G"]));

        // without na_rm the token is kept as text
        let alleles = get_alleles(&["A/NA", "C/G"], &AlleleOptions::default());
        assert_eq!(alleles, text(&["A", "NA", "C", "G"]));
    }

    #[test]
    fn test_na_rm_keeps_missing_cells() {
        let options = AlleleOptions::default().with_na_rm(true);
        let alleles = get_alleles(&[Some("A/C"), None, Some("na/NA")], &options);
        assert_eq!(
            alleles,
            vec![
                Allele::Text("A".to_string()),
                Allele::Text("C".to_string()),
                Allele::Missing,
                Allele::Text("na".to_string()),
            ]
        );
    }

    #[test]
    fn test_as_numeric() {
        let options = AlleleOptions::default().with_as_numeric(true);
        let alleles = get_alleles(&["1/2", "2/3"], &options);
        assert_eq!(
            alleles,
            vec![Allele::Numeric(1.0), Allele::Numeric(2.0), Allele::Numeric(3.0)]
        );
    }

    #[test]
    fn test_coercion_happens_before_dedup() {
        let options = AlleleOptions::default().with_as_numeric(true);
        let alleles = get_alleles(&["1/1.0", " 2 /0", "-0/1e0"], &options);
        assert_eq!(
            alleles,
            vec![Allele::Numeric(1.0), Allele::Numeric(2.0), Allele::Numeric(0.0)]
        );

        // as text the same tokens stay distinct
        let alleles = get_alleles(&["1/1.0"], &AlleleOptions::default());
        assert_eq!(alleles, text(&["1", "1.0"]));
    }

    #[test]
    fn test_numeric_parse_failure_is_missing() {
        let options = AlleleOptions::default().with_as_numeric(true);
        let alleles = get_alleles(&["0/1", "A/.", "NA/2"], &options);
        assert_eq!(
            alleles,
            vec![
                Allele::Numeric(0.0),
                Allele::Numeric(1.0),
                Allele::Missing,
                Allele::Numeric(2.0),
            ]
        );
    }

    #[test]
    fn test_na_rm_then_numeric() {
        let options = AlleleOptions::default()
            .with_na_rm(true)
            .with_as_numeric(true);
        let alleles = get_alleles(&["0|NA", "1|1"], &options.with_split("|"));
        assert_eq!(alleles, vec![Allele::Numeric(0.0), Allele::Numeric(1.0)]);
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<&str> = Vec::new();
        assert!(get_alleles(&empty, &AlleleOptions::default()).is_empty());
        assert!(get_alleles(&[""], &AlleleOptions::default()).is_empty());
    }

    #[test]
    fn test_delimiter_not_present() {
        let alleles = get_alleles(&["A|C", "G|T"], &AlleleOptions::default());
        assert_eq!(alleles, text(&["A|C", "G|T"]));
    }

    #[test]
    fn test_split_is_literal() {
        let options = AlleleOptions::default().with_split("|");
        let alleles = get_alleles(&["A|C", "C|T"], &options);
        assert_eq!(alleles, text(&["A", "C", "T"]));

        let options = AlleleOptions::default().with_split(".");
        let alleles = get_alleles(&["A.C"], &options);
        assert_eq!(alleles, text(&["A", "C"]));
    }

    #[test]
    fn test_split_edge_cases() {
        assert_eq!(split_genotype("A/", "/"), vec!["A"]);
        assert_eq!(split_genotype("/A", "/"), vec!["", "A"]);
        assert_eq!(split_genotype("A//", "/"), vec!["A", ""]);
        assert_eq!(split_genotype("/", "/"), vec![""]);
        assert_eq!(split_genotype("ACG", ""), vec!["A", "C", "G"]);
        assert_eq!(split_genotype("A/C/G", "/"), vec!["A", "C", "G"]);
        assert!(split_genotype("", "/").is_empty());
    }

    #[test]
    fn test_split_alleles_keeps_duplicates() {
        let tokens = split_alleles(&[Some("A/A"), None], "/");
        assert_eq!(
            tokens,
            vec![
                Allele::Text("A".to_string()),
                Allele::Text("A".to_string()),
                Allele::Missing,
            ]
        );
    }

    #[test]
    fn test_nan_tokens_collapse() {
        let options = AlleleOptions::default().with_as_numeric(true);
        let alleles = get_alleles(&["NaN/nan", "x/y"], &options);
        assert_eq!(alleles.len(), 2);
        assert!(alleles[0].as_f64().map_or(false, f64::is_nan));
        assert!(alleles[1].is_missing());
    }
}
