//! Human-shareable short codes.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A random uppercase alphanumeric code, distinct from the handle.
///
/// Generated once at profile creation. Collisions across profiles are not
/// checked; the code is a convenience identifier, not a key.
pub fn generate_short_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
