//! End-to-end walkthrough with keys loaded from disk: derive a lock, index a
//! claimer list, and produce submission-ready claim calldata.
//!
//! Usage:
//!   cargo run --release --bin claim-demo -- [password]

use std::path::Path;
use std::time::Instant;

use alloy_primitives::Address;
use redpacket_prover::{
    commitment::derive_lock,
    index::{verify_claimer_proof, ClaimerIndex},
    prove::{prove_claim, Groth16Prover},
    setup::load_or_setup,
};

fn main() {
    let password = std::env::args().nth(1).unwrap_or_else(|| "abcd1234".to_string());

    println!("Loading keys from disk...");
    let start = Instant::now();
    let keys = load_or_setup(Path::new("keys")).expect("Failed to load or generate keys");
    println!("Keys ready in {:?}", start.elapsed());

    // Creation side: the lock and the claimer index root go on-chain.
    let lock = derive_lock(&password).expect("Failed to derive lock");
    println!("\nLock for registration: {}", lock);

    let claimers = [
        Address::repeat_byte(0x11),
        Address::repeat_byte(0x22),
        Address::repeat_byte(0x33),
    ];
    let index = ClaimerIndex::build(&claimers);
    println!("Claimer index root: {}", index.root());

    // Claim side: inclusion proof for one claimer plus the ZK claim proof.
    let claimer = claimers[1];
    let inclusion = index.proof_for(claimer).expect("claimer is in the list");
    assert!(verify_claimer_proof(index.root(), &inclusion, claimer));
    println!(
        "Inclusion proof for {}: {} sibling(s)",
        claimer,
        inclusion.len()
    );

    let verifying_key = keys.verifying_key.clone();
    let prover = Groth16Prover::new(keys.proving_key);

    println!("\nGenerating claim proof...");
    let start = Instant::now();
    let result = prove_claim(&prover, &verifying_key, &password);
    println!("Proof generation completed in {:?}", start.elapsed());

    match result {
        Ok(Some(claim)) => {
            println!("Claim proof self-verified.");
            println!(
                "Calldata:\n{}",
                serde_json::to_string_pretty(&claim).expect("Failed to encode calldata")
            );
        }
        Ok(None) => {
            eprintln!("Claim proof failed local verification; do not submit.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Claim proof generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
