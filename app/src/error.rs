// ==============================================================================
// error.rs - Genotype Error Types
// ==============================================================================
// Description: Errors raised at the fallible edges of the genotype utilities
// Author: Matt Barham
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================
// The consensus encoder and allele extractor are total over their inputs.
// Errors only arise when building inputs: parsing a separator, shaping a
// matrix, or loading options from JSON.
// ==============================================================================

use thiserror::Error;

/// Errors that can occur while preparing genotype inputs
#[derive(Error, Debug)]
pub enum GenotypeError {
    #[error("Invalid separator: '{0}' (expected '/' or '|')")]
    InvalidSeparator(String),

    #[error("Matrix shape mismatch: {cells} cells cannot fill {nrow} x {ncol}")]
    ShapeMismatch { cells: usize, nrow: usize, ncol: usize },

    #[error("Ragged matrix rows: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result alias for genotype operations
pub type Result<T> = std::result::Result<T, GenotypeError>;
