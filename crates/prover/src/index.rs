//! Claimer index: a sorted-pair Keccak Merkle tree over eligible addresses.
//!
//! The root is registered on-chain at creation time; each claimer later
//! submits the inclusion proof for their own address. Pairs are sorted
//! before hashing so the on-chain verifier needs no left/right position
//! information.

use alloy_primitives::{keccak256, Address, B256};
use thiserror::Error;

/// Errors during proof retrieval
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("address {0} is not in the claimer list")]
    NotFound(Address),
}

/// Merkle index over a fixed claimer list.
///
/// Leaves are `keccak256` of the 20-byte address. Each internal node hashes
/// the byte-wise sorted concatenation of its children; an odd node with no
/// sibling is promoted unchanged to the next level. The index is immutable
/// after construction; a different list yields a different root.
///
/// Duplicate addresses are kept as distinct leaves; lookups resolve to the
/// first matching one. Deduplication is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct ClaimerIndex {
    layers: Vec<Vec<B256>>,
}

fn leaf_hash(claimer: Address) -> B256 {
    keccak256(claimer.as_slice())
}

fn node_hash(a: B256, b: B256) -> B256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_slice());
    buf[32..].copy_from_slice(hi.as_slice());
    keccak256(buf)
}

impl ClaimerIndex {
    /// Build the index over an ordered claimer list.
    ///
    /// An empty list is allowed and produces the empty-input Keccak hash as
    /// root (see [`root`](Self::root)); no on-chain round is expected to be
    /// registered with zero claimers.
    pub fn build(claimers: &[Address]) -> Self {
        let leaves: Vec<B256> = claimers.iter().copied().map(leaf_hash).collect();

        let mut layers = vec![leaves];
        while layers.last().map_or(false, |layer| layer.len() > 1) {
            let prev = layers.last().unwrap();
            let mut next = Vec::with_capacity(prev.len().div_ceil(2));
            for pair in prev.chunks(2) {
                match pair {
                    [left, right] => next.push(node_hash(*left, *right)),
                    [odd] => next.push(*odd),
                    _ => unreachable!("chunks(2) yields 1 or 2 elements"),
                }
            }
            layers.push(next);
        }

        Self { layers }
    }

    /// Number of claimers in the index (duplicates included).
    pub fn len(&self) -> usize {
        self.layers[0].len()
    }

    /// Whether the index was built from an empty list.
    pub fn is_empty(&self) -> bool {
        self.layers[0].is_empty()
    }

    /// Root of the index.
    ///
    /// A single-address list degenerates to its leaf; an empty list hashes
    /// to `keccak256("")`.
    pub fn root(&self) -> B256 {
        match self.layers.last() {
            Some(top) if !top.is_empty() => top[0],
            _ => keccak256(b""),
        }
    }

    /// Inclusion proof for a claimer, as sibling hashes from leaf to root.
    ///
    /// Lookup is by exact byte equality of the address; callers must
    /// normalize to the canonical 20-byte form before insertion and lookup.
    /// Fails with [`IndexError::NotFound`] if the address is absent.
    pub fn proof_for(&self, claimer: Address) -> Result<Vec<B256>, IndexError> {
        let target = leaf_hash(claimer);
        let mut index = self.layers[0]
            .iter()
            .position(|leaf| *leaf == target)
            .ok_or(IndexError::NotFound(claimer))?;

        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
            if sibling < layer.len() {
                proof.push(layer[sibling]);
            }
            index /= 2;
        }

        Ok(proof)
    }
}

/// Verify a sorted-pair inclusion proof against a root.
///
/// Folds the claimer's leaf hash with each sibling in order; the sibling's
/// original left/right position does not matter.
pub fn verify_claimer_proof(root: B256, proof: &[B256], claimer: Address) -> bool {
    let mut hash = leaf_hash(claimer);
    for sibling in proof {
        hash = node_hash(hash, *sibling);
    }
    hash == root
}
