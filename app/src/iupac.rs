// ==============================================================================
// iupac.rs - IUPAC Ambiguity Lookup
// ==============================================================================
// Description: Nucleotide alphabet and diploid pair to ambiguity code table
// Author: Matt Barham
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================
// Table (lowercase codes, both allele orders):
//   A/A → a    C/C → c    G/G → g    T/T → t
//   A/C → m    A/G → r    A/T → w
//   C/G → s    C/T → y    G/T → k
// ==============================================================================

use serde::{Deserialize, Serialize};

/// A single called nucleotide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All four bases in alphabetical order
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Parse an uppercase base letter. Lowercase and IUPAC codes are rejected.
    pub fn from_char(c: char) -> Option<Base> {
        match c {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'G' => Some(Base::G),
            'T' => Some(Base::T),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

/// Look up the lowercase IUPAC ambiguity code for an ordered allele pair
///
/// The table is symmetric: `(A, T)` and `(T, A)` both map to `'w'`.
///
/// # Examples
/// ```
/// use genotype_consensus::iupac::{ambiguity_code, Base};
///
/// assert_eq!(ambiguity_code(Base::A, Base::A), 'a');
/// assert_eq!(ambiguity_code(Base::A, Base::T), 'w');
/// assert_eq!(ambiguity_code(Base::G, Base::C), 's');
/// ```
pub fn ambiguity_code(allele1: Base, allele2: Base) -> char {
    use Base::*;

    match (allele1, allele2) {
        (A, A) => 'a',
        (C, C) => 'c',
        (G, G) => 'g',
        (T, T) => 't',
        (A, C) | (C, A) => 'm',
        (A, G) | (G, A) => 'r',
        (A, T) | (T, A) => 'w',
        (C, G) | (G, C) => 's',
        (C, T) | (T, C) => 'y',
        (G, T) | (T, G) => 'k',
    }
}
