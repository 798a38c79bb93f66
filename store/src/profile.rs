//! Profile storage trait and record.

use crate::StoreError;
use aurid_types::{AccountId, BirthDate, Gender, IdentityHash, ProfileId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shareable-card presentation settings, stored as a JSON column by the
/// managed backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSettings {
    /// Card template id: "basic", "modern", or "minimal".
    pub template: String,
    /// Accent color id: "blue", "black", "green", "purple", or "red".
    pub color: String,
    /// Per-field visibility on the rendered card.
    pub visible_fields: BTreeMap<String, bool>,
}

impl Default for CardSettings {
    fn default() -> Self {
        let visible_fields = ["name", "phone", "email", "headline", "links", "qr"]
            .into_iter()
            .map(|f| (f.to_owned(), true))
            .collect();
        Self {
            template: "basic".to_owned(),
            color: "blue".to_owned(),
            visible_fields,
        }
    }
}

/// One profile per registered user.
///
/// `handle`, `real_name`, `birth_date`, `gender`, and `identity_hash` are
/// write-once: set at creation, never updated. Everything else is mutable
/// by the owning user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub account_id: AccountId,
    pub handle: String,
    pub display_name: String,
    pub real_name: String,
    pub birth_date: BirthDate,
    pub gender: Gender,
    pub identity_hash: IdentityHash,
    pub phone: String,
    pub email: String,
    /// Ordered, up to 3 URLs.
    pub links: Vec<String>,
    pub headline: Option<String>,
    pub categories: Vec<String>,
    /// Field name -> publicly visible.
    pub visibility: BTreeMap<String, bool>,
    /// 6-character human-shareable identifier, distinct from the handle.
    pub short_code: String,
    pub card_settings: CardSettings,
    pub created_at: Timestamp,
}

pub trait ProfileStore {
    /// Insert a new profile.
    ///
    /// The store is the real guarantee of `identity_hash` and `handle`
    /// uniqueness and must fail with [`StoreError::Duplicate`] on collision;
    /// the registration guard's pre-check is a fast path only.
    fn create_profile(&self, profile: &Profile) -> Result<(), StoreError>;

    fn get_profile(&self, id: &ProfileId) -> Result<Profile, StoreError>;

    /// Point lookup by fingerprint, for the duplicate-registration check.
    fn find_by_identity_hash(&self, hash: &IdentityHash)
        -> Result<Option<Profile>, StoreError>;

    fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>, StoreError>;

    /// Replace a profile's mutable fields.
    ///
    /// Must fail with [`StoreError::ImmutableViolation`] if any write-once
    /// field differs from the stored record.
    fn update_profile(&self, profile: &Profile) -> Result<(), StoreError>;
}
