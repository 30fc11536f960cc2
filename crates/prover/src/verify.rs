//! Local claim-proof verification.
//!
//! A convenience check before on-chain submission; the contract always
//! verifies again. `Ok(false)` means "this proof does not open this lock"
//! (the wrong-password case) and is an expected, recoverable outcome.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, Proof, VerifyingKey};
use ark_snark::SNARK;
use thiserror::Error;

/// Errors during verification
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Verification failed: {0}")]
    Verification(String),
}

/// Verify a claim proof against a lock value (the single public input).
pub fn verify_claim(
    vk: &VerifyingKey<Bn254>,
    proof: &Proof<Bn254>,
    lock: Fr,
) -> Result<bool, VerifyError> {
    let public_inputs = vec![lock];

    Groth16::<Bn254>::verify(vk, &public_inputs, proof)
        .map_err(|e| VerifyError::Verification(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prove::{ClaimWitness, Groth16Prover, Prover};
    use crate::setup::setup_claim;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_verify_claim_proof() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = setup_claim(&mut rng).unwrap();

        let witness = ClaimWitness::from_password("abcd1234").unwrap();
        let prover = Groth16Prover::new(keys.proving_key);
        let result = prover.prove(&witness).unwrap();

        let valid = verify_claim(&keys.verifying_key, &result.proof, witness.lock).unwrap();
        assert!(valid);
    }

    #[test]
    fn test_verify_wrong_lock_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let keys = setup_claim(&mut rng).unwrap();

        let witness = ClaimWitness::from_password("abcd1234").unwrap();
        let prover = Groth16Prover::new(keys.proving_key);
        let result = prover.prove(&witness).unwrap();

        // A proof for one password does not open another password's lock.
        let other = ClaimWitness::from_password("wrong").unwrap();
        let valid = verify_claim(&keys.verifying_key, &result.proof, other.lock).unwrap();
        assert!(!valid);
    }
}
