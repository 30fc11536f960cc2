//! Claim circuit for password-locked red packets.
//!
//! Proves knowledge of a password digest without revealing it.
//!
//! Public inputs:
//! - lock: Poseidon hash of the password digest, as registered on-chain
//!
//! Witnesses:
//! - digest: Keccak-256 digest of the password, reduced into the field

use ark_bn254::Fr;
use ark_r1cs_std::fields::fp::FpVar;
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use crate::poseidon::poseidon_hash_var;

/// Claim circuit.
///
/// Enforces `poseidon(digest) == lock`. A valid proof shows the prover knows
/// the digest behind a registered lock; the password itself never appears.
#[derive(Clone)]
pub struct ClaimCircuit {
    // Public input
    /// Expected lock value (Poseidon hash of the digest)
    pub lock: Option<Fr>,

    // Witness
    /// Keccak-256 digest of the password, as a field element
    pub digest: Option<Fr>,
}

impl ClaimCircuit {
    /// Create a new empty circuit for setup.
    /// Uses dummy values that produce valid constraint structure.
    pub fn empty() -> Self {
        Self {
            lock: Some(Fr::from(0u64)),
            digest: Some(Fr::from(0u64)),
        }
    }

    /// Create a new circuit with the witness digest and its expected lock.
    pub fn new(digest: Fr, lock: Fr) -> Self {
        Self {
            lock: Some(lock),
            digest: Some(digest),
        }
    }
}

impl ConstraintSynthesizer<Fr> for ClaimCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // === Allocate public input ===
        let lock_var = FpVar::new_input(cs.clone(), || {
            self.lock.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Allocate witness ===
        let digest_var = FpVar::new_witness(cs.clone(), || {
            self.digest.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Enforce poseidon(digest) == lock ===
        let hashed = poseidon_hash_var(cs, &digest_var)?;
        hashed.enforce_equal(&lock_var)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poseidon::poseidon_hash;
    use ark_relations::r1cs::ConstraintSystem;

    #[test]
    fn test_satisfied_with_matching_lock() {
        let digest = Fr::from(123456789u64);
        let lock = poseidon_hash(digest);

        let cs = ConstraintSystem::<Fr>::new_ref();
        ClaimCircuit::new(digest, lock)
            .generate_constraints(cs.clone())
            .unwrap();

        assert!(cs.is_satisfied().unwrap());
    }

    #[test]
    fn test_unsatisfied_with_wrong_lock() {
        let digest = Fr::from(123456789u64);
        let wrong_lock = Fr::from(42u64);

        let cs = ConstraintSystem::<Fr>::new_ref();
        ClaimCircuit::new(digest, wrong_lock)
            .generate_constraints(cs.clone())
            .unwrap();

        assert!(!cs.is_satisfied().unwrap());
    }

    #[test]
    fn test_unsatisfied_with_wrong_digest() {
        let digest = Fr::from(123456789u64);
        let lock = poseidon_hash(digest);

        let cs = ConstraintSystem::<Fr>::new_ref();
        ClaimCircuit::new(Fr::from(987654321u64), lock)
            .generate_constraints(cs.clone())
            .unwrap();

        assert!(!cs.is_satisfied().unwrap());
    }

    #[test]
    fn test_empty_circuit_has_constraints() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        ClaimCircuit::empty().generate_constraints(cs.clone()).unwrap();

        assert!(cs.num_constraints() > 0);
        assert_eq!(cs.num_instance_variables(), 2); // one + lock
    }
}
