// ==============================================================================
// models.rs - Genotype Data Models
// ==============================================================================
// Description: Genotype cells, matrices, alleles, and operation options
// Author: Matt Barham
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

use crate::error::{GenotypeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delimiter joining the two alleles of a diploid genotype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Separator {
    /// Unphased genotype (e.g., "A/T")
    #[default]
    #[serde(rename = "/")]
    Slash,
    /// Phased genotype (e.g., "A|T")
    #[serde(rename = "|")]
    Pipe,
}

impl Separator {
    pub const ALL: [Separator; 2] = [Separator::Slash, Separator::Pipe];

    pub fn as_char(&self) -> char {
        match self {
            Separator::Slash => '/',
            Separator::Pipe => '|',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Slash => "/",
            Separator::Pipe => "|",
        }
    }

    pub fn from_char(c: char) -> Option<Separator> {
        match c {
            '/' => Some(Separator::Slash),
            '|' => Some(Separator::Pipe),
            _ => None,
        }
    }
}

impl FromStr for Separator {
    type Err = GenotypeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "/" => Ok(Separator::Slash),
            "|" => Ok(Separator::Pipe),
            _ => Err(GenotypeError::InvalidSeparator(s.to_string())),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can sit in a genotype matrix or vector
///
/// `None` from [`GenotypeCell::genotype`] is the missing-cell marker.
pub trait GenotypeCell {
    fn genotype(&self) -> Option<&str>;
}

impl GenotypeCell for &str {
    fn genotype(&self) -> Option<&str> {
        Some(*self)
    }
}

impl GenotypeCell for String {
    fn genotype(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl GenotypeCell for Option<&str> {
    fn genotype(&self) -> Option<&str> {
        *self
    }
}

impl GenotypeCell for Option<String> {
    fn genotype(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Two-dimensional grid of genotype cells, stored row-major
///
/// Orientation (samples x sites or sites x samples) is up to the caller;
/// every transform in this crate is applied cell by cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenotypeMatrix<T> {
    nrow: usize,
    ncol: usize,
    cells: Vec<T>,
}

impl<T> GenotypeMatrix<T> {
    /// Build a matrix from row-major cells
    pub fn new(nrow: usize, ncol: usize, cells: Vec<T>) -> Result<Self> {
        if nrow.checked_mul(ncol) != Some(cells.len()) {
            return Err(GenotypeError::ShapeMismatch {
                cells: cells.len(),
                nrow,
                ncol,
            });
        }

        Ok(Self { nrow, ncol, cells })
    }

    /// Build a matrix from equal-length rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrow = rows.len();
        let ncol = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(nrow * ncol);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != ncol {
                return Err(GenotypeError::RaggedRows {
                    row,
                    expected: ncol,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self { nrow, ncol, cells })
    }

    /// Build a single-column matrix (one cell per row)
    pub fn column(cells: Vec<T>) -> Self {
        Self {
            nrow: cells.len(),
            ncol: 1,
            cells,
        }
    }

    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn ncol(&self) -> usize {
        self.ncol
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.nrow || col >= self.ncol {
            return None;
        }
        self.cells.get(row * self.ncol + col)
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.nrow {
            return None;
        }
        Some(&self.cells[row * self.ncol..(row + 1) * self.ncol])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nrow).map(move |r| &self.cells[r * self.ncol..(r + 1) * self.ncol])
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Apply `f` to every cell, keeping the shape
    pub fn map<U, F>(&self, f: F) -> GenotypeMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        GenotypeMatrix {
            nrow: self.nrow,
            ncol: self.ncol,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

/// A single allele token produced by allele extraction
///
/// Serializes untagged: text as a string, numbers as numbers, missing as null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Allele {
    Text(String),
    Numeric(f64),
    Missing,
}

impl Allele {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Allele::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Allele::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Allele::Missing)
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allele::Text(s) => f.write_str(s),
            Allele::Numeric(v) => write!(f, "{}", v),
            Allele::Missing => f.write_str("NA"),
        }
    }
}

/// Options for consensus encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusOptions {
    /// Requested delimiter (default "/")
    pub sep: Separator,

    /// Replace missing cells with 'n' (default true)
    pub na_to_n: bool,

    /// Only honour `sep` when matching genotype pairs (default false).
    /// When false, pairs joined by either "/" or "|" are encoded.
    pub strict_separator: bool,
}

impl Default for ConsensusOptions {
    fn default() -> Self {
        Self {
            sep: Separator::Slash,
            na_to_n: true,
            strict_separator: false,
        }
    }
}

impl ConsensusOptions {
    /// Load options from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_sep(mut self, sep: Separator) -> Self {
        self.sep = sep;
        self
    }

    pub fn with_na_to_n(mut self, na_to_n: bool) -> Self {
        self.na_to_n = na_to_n;
        self
    }

    pub fn with_strict_separator(mut self, strict: bool) -> Self {
        self.strict_separator = strict;
        self
    }

    /// Whether a pair joined by `sep` should be encoded
    pub fn accepts(&self, sep: Separator) -> bool {
        !self.strict_separator || sep == self.sep
    }
}

/// Options for allele extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlleleOptions {
    /// Literal delimiter to split genotypes on (default "/")
    pub split: String,

    /// Drop tokens whose text is exactly "NA" (default false).
    /// Missing input cells are not affected.
    pub na_rm: bool,

    /// Coerce tokens to numbers before deduplication (default false)
    pub as_numeric: bool,
}

impl Default for AlleleOptions {
    fn default() -> Self {
        Self {
            split: "/".to_string(),
            na_rm: false,
            as_numeric: false,
        }
    }
}

impl AlleleOptions {
    /// Load options from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_split(mut self, split: impl Into<String>) -> Self {
        self.split = split.into();
        self
    }

    pub fn with_na_rm(mut self, na_rm: bool) -> Self {
        self.na_rm = na_rm;
        self
    }

    pub fn with_as_numeric(mut self, as_numeric: bool) -> Self {
        self.as_numeric = as_numeric;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_parse() {
        assert_eq!("/".parse::<Separator>().unwrap(), Separator::Slash);
        assert_eq!("|".parse::<Separator>().unwrap(), Separator::Pipe);

        let result = ",".parse::<Separator>();
        assert!(matches!(result, Err(GenotypeError::InvalidSeparator(_))));
    }

    #[test]
    fn test_separator_display() {
        assert_eq!(Separator::Slash.to_string(), "/");
        assert_eq!(Separator::Pipe.to_string(), "|");
        assert_eq!(Separator::from_char('|'), Some(Separator::Pipe));
        assert_eq!(Separator::from_char('-'), None);
    }

    #[test]
    fn test_matrix_shape() {
        let matrix = GenotypeMatrix::new(2, 3, vec!["A/A"; 6]).unwrap();
        assert_eq!(matrix.nrow(), 2);
        assert_eq!(matrix.ncol(), 3);
        assert_eq!(matrix.len(), 6);

        let result = GenotypeMatrix::new(2, 2, vec!["A/A"; 3]);
        assert!(matches!(
            result,
            Err(GenotypeError::ShapeMismatch { cells: 3, nrow: 2, ncol: 2 })
        ));
    }

    #[test]
    fn test_matrix_from_rows() {
        let matrix =
            GenotypeMatrix::from_rows(vec![vec!["A/A", "C/G"], vec!["T/T", "./."]]).unwrap();
        assert_eq!(matrix.get(0, 1), Some(&"C/G"));
        assert_eq!(matrix.get(1, 0), Some(&"T/T"));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 2), None);
        assert_eq!(matrix.row(1), Some(&["T/T", "./."][..]));

        let rows: Vec<&[&str]> = matrix.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &["A/A", "C/G"]);
    }

    #[test]
    fn test_matrix_ragged_rows() {
        let result = GenotypeMatrix::from_rows(vec![vec!["A/A", "C/G"], vec!["T/T"]]);
        assert!(matches!(
            result,
            Err(GenotypeError::RaggedRows { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_matrix_empty() {
        let matrix: GenotypeMatrix<&str> = GenotypeMatrix::from_rows(Vec::new()).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 0);
    }

    #[test]
    fn test_matrix_map_keeps_shape() {
        let matrix = GenotypeMatrix::new(1, 2, vec!["A/A", "C/C"]).unwrap();
        let lengths = matrix.map(|cell| cell.len());
        assert_eq!(lengths.nrow(), 1);
        assert_eq!(lengths.ncol(), 2);
        assert_eq!(lengths.into_cells(), vec![3, 3]);
    }

    #[test]
    fn test_genotype_cell_impls() {
        assert_eq!("A/T".genotype(), Some("A/T"));
        assert_eq!(String::from("A/T").genotype(), Some("A/T"));
        assert_eq!(Some("A/T").genotype(), Some("A/T"));
        assert_eq!(None::<String>.genotype(), None);
    }

    #[test]
    fn test_consensus_options_defaults() {
        let options = ConsensusOptions::default();
        assert_eq!(options.sep, Separator::Slash);
        assert!(options.na_to_n);
        assert!(!options.strict_separator);
        assert!(options.accepts(Separator::Pipe));
        assert!(options.with_strict_separator(true).accepts(Separator::Slash));
    }

    #[test]
    fn test_options_from_json() {
        let options = ConsensusOptions::from_json(r#"{"sep": "|", "na_to_n": false}"#).unwrap();
        assert_eq!(options.sep, Separator::Pipe);
        assert!(!options.na_to_n);
        assert!(!options.strict_separator);

        let options = AlleleOptions::from_json(r#"{"as_numeric": true}"#).unwrap();
        assert_eq!(options.split, "/");
        assert!(!options.na_rm);
        assert!(options.as_numeric);

        let result = ConsensusOptions::from_json(r#"{"sep": ","}"#);
        assert!(matches!(result, Err(GenotypeError::InvalidOptions(_))));
    }

    #[test]
    fn test_options_json_round_trip() {
        let options = ConsensusOptions::default().with_sep(Separator::Pipe);
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r#""sep":"|""#));
        assert_eq!(ConsensusOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_allele_serialization() {
        let alleles = vec![
            Allele::Text("A".to_string()),
            Allele::Numeric(2.0),
            Allele::Missing,
        ];
        assert_eq!(serde_json::to_string(&alleles).unwrap(), r#"["A",2.0,null]"#);
    }
}
