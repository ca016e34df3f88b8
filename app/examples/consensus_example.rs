// ==============================================================================
// consensus_example.rs - Consensus Encoding and Allele Extraction Example
// ==============================================================================
// Description: Demonstrates IUPAC consensus encoding and allele extraction
// Author: Matt Barham
// Created: 2026-10-19
// Modified: 2026-10-19
// Version: 1.0.0
// ==============================================================================
// Run with debug logging:
//   RUST_LOG=genotype_consensus=debug cargo run --example consensus_example
// ==============================================================================

use anyhow::Result;
use genotype_consensus::{
    alleles_to_consensus, consensus_sequences, encode_genotype, get_alleles, AlleleOptions,
    ConsensusOptions, GenotypeMatrix, Separator,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "genotype_consensus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Consensus example starting...");

    println!("=== Genotype Consensus Example ===\n");

    // Example 1: Single genotypes
    println!("--- Example 1: Single Genotypes ---");
    println!("Collapsing diploid calls into IUPAC codes\n");

    let options = ConsensusOptions::default();
    let calls = vec![
        ("A/A", "Homozygous"),
        ("A/T", "Heterozygous (unphased)"),
        ("C|G", "Heterozygous (phased)"),
        ("./.", "No call"),
        ("G/.", "Half call"),
        ("N/N", "Unknown bases (passed through)"),
    ];

    println!("{:<12} {:<6} {}", "Genotype", "Code", "Type");
    println!("{:-<50}", "");

    for (genotype, description) in calls {
        let code = encode_genotype(Some(genotype), &options);
        println!(
            "{:<12} {:<6} {}",
            genotype,
            code.as_deref().unwrap_or("NA"),
            description
        );
    }

    // Example 2: Matrix encoding
    println!("\n--- Example 2: Matrix Encoding ---");
    println!("Rows are samples, columns are sites\n");

    let matrix = GenotypeMatrix::from_rows(vec![
        vec![Some("A/A"), Some("C/T"), Some("G|G"), None],
        vec![Some("A/G"), Some("./."), Some("T/T"), Some("A/C")],
        vec![Some("A/A"), Some("T/T"), Some("G/C"), Some("C|C")],
    ])?;

    let keep_missing = ConsensusOptions::default().with_na_to_n(false);
    let encoded = alleles_to_consensus(&matrix, &keep_missing);
    for (i, row) in encoded.rows().enumerate() {
        let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("NA")).collect();
        println!("  sample{} → {}", i + 1, cells.join(" "));
    }

    // Example 3: Consensus sequences
    println!("\n--- Example 3: Consensus Sequences ---");
    println!("One sequence per sample, ready for distance calculations\n");

    for (i, sequence) in consensus_sequences(&matrix, &options).iter().enumerate() {
        println!("  >sample{}\n  {}", i + 1, sequence);
    }

    // Example 4: Strict separator handling
    println!("\n--- Example 4: Strict Separator ---");
    println!("Only phased calls are encoded when sep='|' is enforced\n");

    let strict = ConsensusOptions::from_json(r#"{"sep": "|", "strict_separator": true}"#)?;
    for genotype in ["A|T", "A/T"] {
        println!(
            "  {} → {}",
            genotype,
            encode_genotype(Some(genotype), &strict).as_deref().unwrap_or("NA")
        );
    }
    println!("  requested separator: {}", Separator::Pipe);

    // Example 5: Allele extraction
    println!("\n--- Example 5: Allele Extraction ---\n");

    let genotypes = ["A/C", "C/G", "G/NA"];
    let text: Vec<String> = get_alleles(&genotypes, &AlleleOptions::default())
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  alleles:           {}", text.join(", "));

    let na_rm = AlleleOptions::default().with_na_rm(true);
    let text: Vec<String> = get_alleles(&genotypes, &na_rm)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  alleles (na_rm):   {}", text.join(", "));

    let numeric = AlleleOptions::default().with_split("|").with_as_numeric(true);
    let values = get_alleles(&["0|1", "1|1", "2|0"], &numeric);
    println!("  numeric alleles:   {}", serde_json::to_string(&values)?);

    println!("\n=== Example Complete ===");

    Ok(())
}
