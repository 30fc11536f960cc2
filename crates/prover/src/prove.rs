//! Claim proof generation and assembly.
//!
//! Proof generation is CPU-bound and can take seconds; callers that live on
//! an event loop should run it behind a blocking boundary. The pipeline is
//! otherwise pure computation: witness from the password, Groth16 proof,
//! local self-check, calldata marshaling.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, Proof, ProvingKey, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use redpacket_circuits::{poseidon_hash, ClaimCircuit};

use crate::calldata::{fr_dec, SolidityCalldata};
use crate::commitment::{password_digest, CommitmentError};
use crate::verify::{verify_claim, VerifyError};

/// Errors during proof generation
#[derive(Error, Debug)]
pub enum ProveError {
    #[error("Proof generation failed: {0}")]
    ProofGeneration(String),
    #[error("Serialization failed: {0}")]
    Serialization(String),
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

/// Witness for the claim circuit: the password digest and the lock it opens.
#[derive(Debug, Clone, Copy)]
pub struct ClaimWitness {
    /// Keccak-256 digest of the password, reduced into the field
    pub digest: Fr,
    /// Poseidon hash of the digest (the proof's public signal)
    pub lock: Fr,
}

impl ClaimWitness {
    /// Build the witness for a password.
    pub fn from_password(password: &str) -> Result<Self, CommitmentError> {
        let digest = password_digest(password)?;
        Ok(Self {
            digest,
            lock: poseidon_hash(digest),
        })
    }
}

/// A proof with its public inputs
#[derive(Clone)]
pub struct ProofWithInputs {
    pub proof: Proof<Bn254>,
    pub public_inputs: Vec<Fr>,
}

impl ProofWithInputs {
    /// Serialize proof to bytes
    pub fn serialize_proof(&self) -> Result<Vec<u8>, ProveError> {
        let mut bytes = Vec::new();
        self.proof
            .serialize_compressed(&mut bytes)
            .map_err(|e| ProveError::Serialization(e.to_string()))?;
        Ok(bytes)
    }

    /// Deserialize proof from bytes
    pub fn deserialize_proof(bytes: &[u8]) -> Result<Proof<Bn254>, ProveError> {
        Proof::deserialize_compressed(bytes).map_err(|e| ProveError::Serialization(e.to_string()))
    }
}

/// Proving backend for the claim circuit.
///
/// The production implementation drives Groth16 with a proving key loaded
/// from disk; tests can substitute a stub without touching the rest of the
/// pipeline.
pub trait Prover {
    fn prove(&self, witness: &ClaimWitness) -> Result<ProofWithInputs, ProveError>;
}

/// Groth16 prover over BN254
pub struct Groth16Prover {
    proving_key: ProvingKey<Bn254>,
}

impl Groth16Prover {
    pub fn new(proving_key: ProvingKey<Bn254>) -> Self {
        Self { proving_key }
    }
}

impl Prover for Groth16Prover {
    fn prove(&self, witness: &ClaimWitness) -> Result<ProofWithInputs, ProveError> {
        let circuit = ClaimCircuit::new(witness.digest, witness.lock);

        let mut rng = StdRng::from_entropy();
        let proof = Groth16::<Bn254>::prove(&self.proving_key, circuit, &mut rng)
            .map_err(|e| ProveError::ProofGeneration(e.to_string()))?;

        Ok(ProofWithInputs {
            proof,
            public_inputs: vec![witness.lock],
        })
    }
}

/// A claim proof ready for submission: calldata plus the authoritative
/// public signals from the prover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimProof {
    pub calldata: SolidityCalldata,
    pub public_signals: Vec<String>,
}

/// Generate and locally check a claim proof for `password`.
///
/// Returns `Ok(None)` when the freshly generated proof fails the local check
/// against `vk`; such a proof must not be submitted. Infrastructure problems
/// (unusable keys, failed proving) surface as errors instead.
pub fn prove_claim(
    prover: &impl Prover,
    vk: &VerifyingKey<Bn254>,
    password: &str,
) -> Result<Option<ClaimProof>, ProveError> {
    let witness = ClaimWitness::from_password(password)?;
    let result = prover.prove(&witness)?;

    if !verify_claim(vk, &result.proof, witness.lock)? {
        tracing::warn!("claim proof failed local verification, withholding it");
        return Ok(None);
    }

    Ok(Some(ClaimProof {
        calldata: SolidityCalldata::from_proof(&result.proof, &result.public_inputs),
        public_signals: result.public_inputs.iter().map(fr_dec).collect(),
    }))
}
