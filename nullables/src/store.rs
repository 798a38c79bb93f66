//! Nullable store — thread-safe in-memory storage for testing.

use aurid_store::{
    AccountRecord, AccountStore, Badge, BadgeStore, Profile, ProfileStore, StoreError,
    VerificationId, VerificationRecord, VerificationStore,
};
use aurid_types::{
    AccountId, IdentityHash, ProfileId, Timestamp, VerificationKind, VerificationStatus,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory implementation of every store trait.
///
/// Enforces the same constraints the managed backend does: unique
/// `identity_hash` and `handle` across profiles, unique account emails,
/// write-once profile fields, append-only verifications and badges.
/// Faults can be injected per lookup/insert to exercise fail-closed paths.
pub struct MemoryStore {
    accounts: Mutex<HashMap<AccountId, AccountRecord>>,
    profiles: Mutex<HashMap<ProfileId, Profile>>,
    verifications: Mutex<Vec<VerificationRecord>>,
    badges: Mutex<Vec<Badge>>,
    next_account: Mutex<u64>,
    fail_identity_lookups: Mutex<bool>,
    fail_profile_creates: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            profiles: Mutex::new(HashMap::new()),
            verifications: Mutex::new(Vec::new()),
            badges: Mutex::new(Vec::new()),
            next_account: Mutex::new(1),
            fail_identity_lookups: Mutex::new(false),
            fail_profile_creates: Mutex::new(false),
        }
    }

    /// Make every `find_by_identity_hash` call fail with a backend error.
    pub fn fail_identity_lookups(&self, fail: bool) {
        *self.fail_identity_lookups.lock().unwrap() = fail;
    }

    /// Make every `create_profile` call fail with a backend error.
    pub fn fail_profile_creates(&self, fail: bool) {
        *self.fail_profile_creates.lock().unwrap() = fail;
    }

    /// Number of stored accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    /// Number of stored profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    /// Test hook: rewrite a verification's name snapshot, to model the
    /// snapshot diverging from the registered real name.
    pub fn overwrite_verified_name(&self, id: VerificationId, name: &str) {
        let mut records = self.verifications.lock().unwrap();
        records[id.0 as usize].verified_name = name.to_owned();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryStore {
    fn create_account(&self, email: &str, _password: &str) -> Result<AccountId, StoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.values().any(|a| a.email == email) {
            return Err(StoreError::Duplicate(format!("account email {email}")));
        }
        let mut next = self.next_account.lock().unwrap();
        let mut bytes = [0u8; 16];
        bytes[8..].copy_from_slice(&next.to_be_bytes());
        *next += 1;
        let id = AccountId::new(bytes);
        accounts.insert(
            id,
            AccountRecord {
                id,
                email: email.to_owned(),
                created_at: Timestamp::EPOCH,
            },
        );
        Ok(id)
    }

    fn delete_account(&self, id: &AccountId) -> Result<(), StoreError> {
        self.accounts
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn get_account(&self, id: &AccountId) -> Result<AccountRecord, StoreError> {
        self.accounts
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl ProfileStore for MemoryStore {
    fn create_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        if *self.fail_profile_creates.lock().unwrap() {
            return Err(StoreError::Backend("injected create fault".to_owned()));
        }
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.contains_key(&profile.id) {
            return Err(StoreError::Duplicate(format!("profile id {}", profile.id)));
        }
        if profiles
            .values()
            .any(|p| p.identity_hash == profile.identity_hash)
        {
            return Err(StoreError::Duplicate("identity_hash".to_owned()));
        }
        if profiles.values().any(|p| p.handle == profile.handle) {
            return Err(StoreError::Duplicate(format!("handle {}", profile.handle)));
        }
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    fn get_profile(&self, id: &ProfileId) -> Result<Profile, StoreError> {
        self.profiles
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn find_by_identity_hash(
        &self,
        hash: &IdentityHash,
    ) -> Result<Option<Profile>, StoreError> {
        if *self.fail_identity_lookups.lock().unwrap() {
            return Err(StoreError::Backend("injected lookup fault".to_owned()));
        }
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .find(|p| &p.identity_hash == hash)
            .cloned())
    }

    fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .find(|p| p.handle == handle)
            .cloned())
    }

    fn update_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.lock().unwrap();
        let existing = profiles
            .get(&profile.id)
            .ok_or_else(|| StoreError::NotFound(profile.id.to_string()))?;

        for (field, changed) in [
            ("handle", existing.handle != profile.handle),
            ("real_name", existing.real_name != profile.real_name),
            ("birth_date", existing.birth_date != profile.birth_date),
            ("gender", existing.gender != profile.gender),
            (
                "identity_hash",
                existing.identity_hash != profile.identity_hash,
            ),
        ] {
            if changed {
                return Err(StoreError::ImmutableViolation(field.to_owned()));
            }
        }
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }
}

impl VerificationStore for MemoryStore {
    fn insert_verification(
        &self,
        record: VerificationRecord,
    ) -> Result<VerificationId, StoreError> {
        let mut records = self.verifications.lock().unwrap();
        records.push(record);
        Ok(VerificationId((records.len() - 1) as u64))
    }

    fn get_verification(&self, id: VerificationId) -> Result<VerificationRecord, StoreError> {
        self.verifications
            .lock()
            .unwrap()
            .get(id.0 as usize)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn latest_pending(
        &self,
        profile_id: &ProfileId,
        kind: VerificationKind,
    ) -> Result<Option<(VerificationId, VerificationRecord)>, StoreError> {
        Ok(self
            .verifications
            .lock()
            .unwrap()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, r)| {
                r.profile_id == *profile_id
                    && r.kind == kind
                    && r.status == VerificationStatus::Pending
            })
            .map(|(i, r)| (VerificationId(i as u64), r.clone())))
    }

    fn set_verification_status(
        &self,
        id: VerificationId,
        status: VerificationStatus,
        verified_at: Option<Timestamp>,
    ) -> Result<(), StoreError> {
        let mut records = self.verifications.lock().unwrap();
        let record = records
            .get_mut(id.0 as usize)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.status = status;
        record.verified_at = verified_at;
        Ok(())
    }
}

impl BadgeStore for MemoryStore {
    fn insert_badge(&self, badge: Badge) -> Result<(), StoreError> {
        self.badges.lock().unwrap().push(badge);
        Ok(())
    }

    fn badges_for(&self, profile_id: &ProfileId) -> Result<Vec<Badge>, StoreError> {
        Ok(self
            .badges
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.profile_id == *profile_id)
            .cloned()
            .collect())
    }
}
