// ==============================================================================
// lib.rs - Genotype Consensus Library
// ==============================================================================
// Description: Library interface for genotype consensus and allele extraction
// Author: Matt Barham
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================

pub mod alleles;
pub mod consensus;
pub mod error;
pub mod iupac;
pub mod models;

pub use alleles::{get_alleles, split_alleles};
pub use consensus::{
    alleles_to_consensus, alleles_to_consensus_vec, consensus_sequences, encode_genotype,
};
pub use error::{GenotypeError, Result};
pub use iupac::{ambiguity_code, Base};
pub use models::{
    Allele, AlleleOptions, ConsensusOptions, GenotypeCell, GenotypeMatrix, Separator,
};
