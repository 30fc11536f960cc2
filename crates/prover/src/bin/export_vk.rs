//! Export the claim verifying key for on-chain verifier registration.
//!
//! Loads keys from the `keys/` directory (generating them on first run) and
//! prints the compressed verifying key as hex, alongside a JSON record for
//! deployment tooling.

use std::path::Path;

use redpacket_prover::setup::load_or_setup;

fn main() {
    let keys_dir = Path::new("keys");

    println!("Loading or generating circuit keys...");
    let keys = load_or_setup(keys_dir).expect("Failed to load or generate keys");

    let vk_bytes = keys.serialize_vk().expect("Failed to serialize verifying key");

    println!("\nClaim VK ({} bytes):", vk_bytes.len());
    println!("0x{}", hex::encode(&vk_bytes));

    let json = serde_json::json!({
        "claim_vk": format!("0x{}", hex::encode(&vk_bytes)),
    });

    let json_path = keys_dir.join("verifying_key.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&json).unwrap())
        .expect("Failed to write JSON");
    println!("JSON exported to {:?}", json_path);
}
