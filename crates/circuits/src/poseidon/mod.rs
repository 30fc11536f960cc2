//! Poseidon hash function for BN254.
//!
//! Uses arkworks' built-in Poseidon sponge. The same configuration backs the
//! native hash and the R1CS gadget, so a lock computed off-circuit matches
//! the public signal enforced in-circuit.

mod config;
mod gadgets;
mod native;

pub use config::poseidon_config;
pub use gadgets::poseidon_hash_var;
pub use native::poseidon_hash;
