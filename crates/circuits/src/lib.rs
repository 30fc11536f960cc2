//! ZK circuit for password-locked red packet claims.
//!
//! This crate provides:
//! - `ClaimCircuit`: prove knowledge of a password digest whose Poseidon
//!   hash equals a public lock value
//! - Poseidon hashing (native and in-circuit) over the BN254 scalar field,
//!   shared so that locally derived locks and proof public signals agree

pub mod claim;
pub mod poseidon;

pub use claim::ClaimCircuit;
pub use poseidon::{poseidon_config, poseidon_hash, poseidon_hash_var};

use ark_bn254::Fr;

/// Common field type for all operations
pub type ConstraintF = Fr;
