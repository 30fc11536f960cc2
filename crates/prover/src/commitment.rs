//! Lock derivation for password-protected red packets.
//!
//! The lock registered on-chain at creation time is the Poseidon hash of the
//! Keccak-256 digest of the password. At claim time the same derivation runs
//! again: the digest becomes the private witness and the lock the public
//! signal of the claim proof.

use std::fmt;

use alloy_primitives::{keccak256, B256};
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use redpacket_circuits::poseidon_hash;

/// Errors during lock derivation
#[derive(Error, Debug)]
pub enum CommitmentError {
    #[error("password must not be empty")]
    EmptyPassword,
}

/// The on-chain lock value: `poseidon(keccak256(password))`.
///
/// Encoded as a 32-byte big-endian value; the text form is a `0x`-prefixed,
/// left-zero-padded, 64-character hex string, matching what the red packet
/// contract stores as its hash lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lock(pub B256);

impl Lock {
    /// Build a lock from a field element.
    pub fn from_field(value: Fr) -> Self {
        Self(fr_to_b256(value))
    }

    /// The lock as a field element, for use as a proof public signal.
    pub fn to_field(&self) -> Fr {
        b256_to_fr(self.0)
    }

    /// Raw bytes of the lock.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_ref()
    }
}

impl fmt::Display for Lock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert BN254 field element to B256 (big-endian, left-zero-padded).
fn fr_to_b256(value: Fr) -> B256 {
    B256::from_slice(&value.into_bigint().to_bytes_be())
}

/// Convert B256 to BN254 field element, reducing mod the field order.
fn b256_to_fr(value: B256) -> Fr {
    Fr::from_be_bytes_mod_order(value.as_slice())
}

/// Keccak-256 digest of the password bytes, reduced into the scalar field.
///
/// This is the claim circuit's private witness. The password is taken as raw
/// UTF-8 bytes; no case, whitespace, or Unicode normalization is applied, so
/// only a byte-identical password reproduces the digest.
pub fn password_digest(password: &str) -> Result<Fr, CommitmentError> {
    if password.is_empty() {
        return Err(CommitmentError::EmptyPassword);
    }
    let digest = keccak256(password.as_bytes());
    Ok(Fr::from_be_bytes_mod_order(digest.as_slice()))
}

/// Derive the lock for a password.
///
/// Deterministic and pure: the same password bytes always produce the same
/// lock. No I/O is performed.
pub fn derive_lock(password: &str) -> Result<Lock, CommitmentError> {
    let digest = password_digest(password)?;
    Ok(Lock::from_field(poseidon_hash(digest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_lock_deterministic() {
        let lock1 = derive_lock("abcd1234").unwrap();
        let lock2 = derive_lock("abcd1234").unwrap();
        assert_eq!(lock1, lock2);
    }

    #[test]
    fn test_derive_lock_distinct_passwords() {
        let lock1 = derive_lock("abcd1234").unwrap();
        let lock2 = derive_lock("abcd1235").unwrap();
        assert_ne!(lock1, lock2);
    }

    #[test]
    fn test_derive_lock_byte_sensitive() {
        // No normalization: case and whitespace change the lock.
        let base = derive_lock("Password").unwrap();
        assert_ne!(base, derive_lock("password").unwrap());
        assert_ne!(base, derive_lock("Password ").unwrap());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(
            derive_lock(""),
            Err(CommitmentError::EmptyPassword)
        ));
    }

    #[test]
    fn test_lock_display_format() {
        let lock = derive_lock("abcd1234").unwrap();
        let hex = lock.to_string();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 66);
        assert!(hex[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_lock_field_round_trip() {
        let lock = derive_lock("abcd1234").unwrap();
        assert_eq!(Lock::from_field(lock.to_field()), lock);
    }

    #[test]
    fn test_digest_differs_from_lock() {
        let digest = password_digest("abcd1234").unwrap();
        let lock = derive_lock("abcd1234").unwrap();
        assert_ne!(Lock::from_field(digest), lock);
    }
}
