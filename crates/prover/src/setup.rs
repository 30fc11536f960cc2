//! Trusted setup and key persistence for the claim circuit.

use std::path::Path;

use ark_bn254::Bn254;
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use redpacket_circuits::ClaimCircuit;

/// File name of the persisted proving key
const PROVING_KEY_FILE: &str = "claim.pk";

/// File name of the persisted verifying key
const VERIFYING_KEY_FILE: &str = "claim.vk";

/// Errors that can occur during setup
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Circuit setup failed: {0}")]
    CircuitSetup(String),
    #[error("Serialization failed: {0}")]
    Serialization(String),
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Keys for the claim circuit
#[derive(Clone)]
pub struct CircuitKeyPair {
    pub proving_key: ProvingKey<Bn254>,
    pub verifying_key: VerifyingKey<Bn254>,
}

impl CircuitKeyPair {
    /// Serialize proving key to bytes
    pub fn serialize_pk(&self) -> Result<Vec<u8>, SetupError> {
        let mut bytes = Vec::new();
        self.proving_key
            .serialize_compressed(&mut bytes)
            .map_err(|e| SetupError::Serialization(e.to_string()))?;
        Ok(bytes)
    }

    /// Serialize verifying key to bytes
    pub fn serialize_vk(&self) -> Result<Vec<u8>, SetupError> {
        let mut bytes = Vec::new();
        self.verifying_key
            .serialize_compressed(&mut bytes)
            .map_err(|e| SetupError::Serialization(e.to_string()))?;
        Ok(bytes)
    }

    /// Deserialize proving key from bytes
    pub fn deserialize_pk(bytes: &[u8]) -> Result<ProvingKey<Bn254>, SetupError> {
        ProvingKey::deserialize_compressed(bytes)
            .map_err(|e| SetupError::Deserialization(e.to_string()))
    }

    /// Deserialize verifying key from bytes
    pub fn deserialize_vk(bytes: &[u8]) -> Result<VerifyingKey<Bn254>, SetupError> {
        VerifyingKey::deserialize_compressed(bytes)
            .map_err(|e| SetupError::Deserialization(e.to_string()))
    }

    /// Save both keys to a directory
    pub fn save_to_directory(&self, dir: &Path) -> Result<(), SetupError> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(PROVING_KEY_FILE), self.serialize_pk()?)?;
        std::fs::write(dir.join(VERIFYING_KEY_FILE), self.serialize_vk()?)?;
        Ok(())
    }

    /// Load both keys from a directory
    pub fn load_from_directory(dir: &Path) -> Result<Self, SetupError> {
        let proving_key =
            Self::deserialize_pk(&std::fs::read(dir.join(PROVING_KEY_FILE))?)?;
        let verifying_key =
            Self::deserialize_vk(&std::fs::read(dir.join(VERIFYING_KEY_FILE))?)?;

        Ok(Self {
            proving_key,
            verifying_key,
        })
    }
}

/// Run circuit-specific setup for the claim circuit
pub fn setup_claim(rng: &mut StdRng) -> Result<CircuitKeyPair, SetupError> {
    let circuit = ClaimCircuit::empty();
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(circuit, rng)
        .map_err(|e| SetupError::CircuitSetup(e.to_string()))?;

    Ok(CircuitKeyPair {
        proving_key: pk,
        verifying_key: vk,
    })
}

/// Load keys from `dir`, or run setup and persist fresh keys there.
pub fn load_or_setup(dir: &Path) -> Result<CircuitKeyPair, SetupError> {
    if dir.join(PROVING_KEY_FILE).exists() {
        return CircuitKeyPair::load_from_directory(dir);
    }

    let mut rng = StdRng::from_entropy();
    let keys = setup_claim(&mut rng)?;
    keys.save_to_directory(dir)?;
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_serialization_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = setup_claim(&mut rng).unwrap();

        let pk_bytes = keys.serialize_pk().unwrap();
        let vk_bytes = keys.serialize_vk().unwrap();

        let _pk = CircuitKeyPair::deserialize_pk(&pk_bytes).unwrap();
        let vk = CircuitKeyPair::deserialize_vk(&vk_bytes).unwrap();
        assert_eq!(vk, keys.verifying_key);
    }

    #[test]
    fn test_directory_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = setup_claim(&mut rng).unwrap();

        let dir = tempfile::tempdir().unwrap();
        keys.save_to_directory(dir.path()).unwrap();

        let loaded = CircuitKeyPair::load_from_directory(dir.path()).unwrap();
        assert_eq!(loaded.verifying_key, keys.verifying_key);
    }

    #[test]
    fn test_load_or_setup_generates_then_reuses() {
        let dir = tempfile::tempdir().unwrap();

        let first = load_or_setup(dir.path()).unwrap();
        let second = load_or_setup(dir.path()).unwrap();
        assert_eq!(first.verifying_key, second.verifying_key);
    }

    #[test]
    fn test_load_from_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            CircuitKeyPair::load_from_directory(&missing),
            Err(SetupError::Io(_))
        ));
    }
}
