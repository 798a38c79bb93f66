//! Duplicate-identity pre-check.

use aurid_store::{ProfileStore, StoreError};
use aurid_types::IdentityHash;

/// Fast-path duplicate check against the profile store.
///
/// This is a UX optimization, not the enforcement mechanism: the store's
/// uniqueness constraint on `identity_hash` is the real guarantee, and two
/// racing signups can both pass this check before either insert lands.
pub struct RegistrationGuard<'a> {
    profiles: &'a dyn ProfileStore,
}

impl<'a> RegistrationGuard<'a> {
    pub fn new(profiles: &'a dyn ProfileStore) -> Self {
        Self { profiles }
    }

    /// Whether a profile with this fingerprint already exists.
    ///
    /// Fails closed: a lookup fault propagates and the registration attempt
    /// aborts, rather than being treated as "no duplicate".
    pub fn check_duplicate(&self, fingerprint: &IdentityHash) -> Result<bool, StoreError> {
        Ok(self.profiles.find_by_identity_hash(fingerprint)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurid_nullables::MemoryStore;

    #[test]
    fn empty_store_has_no_duplicates() {
        let store = MemoryStore::new();
        let guard = RegistrationGuard::new(&store);
        assert!(!guard.check_duplicate(&IdentityHash::new([1u8; 32])).unwrap());
    }

    #[test]
    fn lookup_fault_propagates() {
        let store = MemoryStore::new();
        store.fail_identity_lookups(true);
        let guard = RegistrationGuard::new(&store);
        assert!(guard.check_duplicate(&IdentityHash::new([1u8; 32])).is_err());
    }
}
