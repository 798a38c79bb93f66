//! Tunable parameters for the identity core.

use serde::{Deserialize, Serialize};

/// Every tunable value in one place, so hosts and tests configure the core
/// without scattering magic numbers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PassParams {
    /// How long an issued one-time code stays valid, in seconds.
    pub code_ttl_secs: u64,

    /// Number of digits in a one-time code.
    pub code_length: usize,

    /// Minimum password length accepted at signup.
    pub min_password_len: usize,

    /// Minimum number of digits in a phone number.
    pub min_phone_digits: usize,

    /// Minimum handle length.
    pub min_handle_len: usize,

    /// Maximum number of profile links.
    pub max_links: usize,

    /// Maximum headline length in characters.
    pub max_headline_chars: usize,

    /// Length of the human-shareable short code.
    pub short_code_len: usize,
}

impl Default for PassParams {
    fn default() -> Self {
        Self {
            code_ttl_secs: 10 * 60,
            code_length: 6,
            min_password_len: 8,
            min_phone_digits: 10,
            min_handle_len: 3,
            max_links: 3,
            max_headline_chars: 100,
            short_code_len: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_rules() {
        let p = PassParams::default();
        assert_eq!(p.code_ttl_secs, 600);
        assert_eq!(p.code_length, 6);
        assert_eq!(p.min_password_len, 8);
        assert_eq!(p.max_links, 3);
    }
}
