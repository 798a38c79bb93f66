//! Verification attempt storage trait and record.

use crate::StoreError;
use aurid_types::{ProfileId, Timestamp, VerificationKind, VerificationStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned id of a verification record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationId(pub u64);

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Channel-specific detail of an attempt: the one-time code, its absolute
/// expiry, and where the code was sent. Stored as a JSON column by the
/// managed backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationMetadata {
    pub destination: String,
    pub code: String,
    pub expires_at: Timestamp,
}

/// One record per attempt to verify a channel for a profile.
///
/// Records are never deleted; re-issuing creates a new record and older
/// pending ones become implicitly dead (only the most recent is consulted).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub profile_id: ProfileId,
    pub kind: VerificationKind,
    pub status: VerificationStatus,
    /// Snapshot of the profile's `real_name` at issuance, for the
    /// mismatch check at confirmation.
    pub verified_name: String,
    pub metadata: VerificationMetadata,
    pub created_at: Timestamp,
    /// Set only on the transition to `verified`.
    pub verified_at: Option<Timestamp>,
}

pub trait VerificationStore {
    /// Append a new record, returning its store-assigned id.
    ///
    /// Insertion order must agree with `created_at` ordering so that
    /// [`VerificationStore::latest_pending`] is well defined.
    fn insert_verification(
        &self,
        record: VerificationRecord,
    ) -> Result<VerificationId, StoreError>;

    fn get_verification(&self, id: VerificationId) -> Result<VerificationRecord, StoreError>;

    /// The most recently issued pending record for a (profile, kind) pair.
    fn latest_pending(
        &self,
        profile_id: &ProfileId,
        kind: VerificationKind,
    ) -> Result<Option<(VerificationId, VerificationRecord)>, StoreError>;

    /// Transition a record's status, recording `verified_at` when supplied.
    fn set_verification_status(
        &self,
        id: VerificationId,
        status: VerificationStatus,
        verified_at: Option<Timestamp>,
    ) -> Result<(), StoreError>;
}
