//! SHA-256 hashing for identity fingerprints.

use aurid_types::IdentityHash;
use sha2::{Digest, Sha256};

/// Compute a 256-bit SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash an identity fragment to produce its [`IdentityHash`].
///
/// One-way: the 7-digit fragment cannot be recovered from the output.
pub fn hash_identity_fragment(fragment: &str) -> IdentityHash {
    IdentityHash::new(sha256(fragment.as_bytes()))
}
