//! Off-chain pipeline for password-locked red packet distributions.
//!
//! This crate prepares everything a claim submission needs before it touches
//! a chain:
//! - Lock derivation from a secret password (the commitment registered at
//!   creation time)
//! - A Merkle index over the eligible claimer addresses (root for
//!   registration, per-address inclusion proofs for claims)
//! - Groth16 claim proofs, self-verified and marshaled into the calldata
//!   shape the on-chain verifier takes

pub mod calldata;
pub mod commitment;
pub mod index;
pub mod prove;
pub mod setup;
pub mod verify;

pub use calldata::{convert_calldata, export_solidity_calldata, CalldataError, SolidityCalldata};
pub use commitment::{derive_lock, password_digest, CommitmentError, Lock};
pub use index::{verify_claimer_proof, ClaimerIndex, IndexError};
pub use prove::{
    prove_claim, ClaimProof, ClaimWitness, Groth16Prover, ProofWithInputs, ProveError, Prover,
};
pub use setup::{load_or_setup, setup_claim, CircuitKeyPair, SetupError};
pub use verify::{verify_claim, VerifyError};

use ark_bn254::Fr;

/// Common field type for all operations
pub type ConstraintF = Fr;
