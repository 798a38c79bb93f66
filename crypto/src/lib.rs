//! Cryptographic primitives for the Aurid Pass identity core.

pub mod hash;

pub use hash::{hash_identity_fragment, sha256};
