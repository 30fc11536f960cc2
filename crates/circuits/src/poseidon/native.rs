//! Native Poseidon hash (outside circuits).

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::PoseidonSponge;
use ark_crypto_primitives::sponge::CryptographicSponge;

use super::config::poseidon_config;

/// Hash a single field element.
///
/// This is the lock derivation: the input is a password's Keccak digest
/// reduced into the field, the output is the lock registered on-chain.
pub fn poseidon_hash(input: Fr) -> Fr {
    let config = poseidon_config();
    let mut sponge = PoseidonSponge::new(&config);
    sponge.absorb(&input);
    sponge.squeeze_field_elements(1)[0]
}
