//! Handle rules and the public share URL.

use crate::error::ProfileError;

/// Lowercase the handle and strip everything outside `[a-z0-9_]`.
pub fn normalize_handle(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Check a normalized handle against the length rule.
pub fn validate_handle(handle: &str, min_len: usize) -> Result<(), ProfileError> {
    let ok = handle.len() >= min_len
        && handle
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if ok {
        Ok(())
    } else {
        Err(ProfileError::InvalidHandle { min: min_len })
    }
}

/// The public URL a profile's QR code and share sheet point at.
pub fn share_url(handle: &str) -> String {
    format!("https://aurid.app/@{handle}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(normalize_handle("Mina.Dev!"), "minadev");
        assert_eq!(normalize_handle("mina_dev"), "mina_dev");
        assert_eq!(normalize_handle("MINA 92"), "mina92");
    }

    #[test]
    fn validate_enforces_min_length() {
        assert!(validate_handle("ab", 3).is_err());
        assert!(validate_handle("abc", 3).is_ok());
    }

    #[test]
    fn validate_rejects_uppercase_and_symbols() {
        assert!(validate_handle("Mina", 3).is_err());
        assert!(validate_handle("mina-dev", 3).is_err());
    }

    #[test]
    fn share_url_embeds_handle() {
        assert_eq!(share_url("mina_dev"), "https://aurid.app/@mina_dev");
    }
}
