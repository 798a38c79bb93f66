//! Badge storage trait and record.

use crate::StoreError;
use aurid_types::{ProfileId, Timestamp, VerificationKind};
use serde::{Deserialize, Serialize};

/// Channel-specific detail of a grant, e.g. which email was verified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeMetadata {
    pub kind: VerificationKind,
    pub destination: String,
    pub verified_at: Timestamp,
}

/// A trust badge, created once per successful verification and never
/// mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Badge {
    pub profile_id: ProfileId,
    /// Badge class, e.g. "existence".
    pub badge_type: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub metadata: BadgeMetadata,
}

pub trait BadgeStore {
    fn insert_badge(&self, badge: Badge) -> Result<(), StoreError>;

    fn badges_for(&self, profile_id: &ProfileId) -> Result<Vec<Badge>, StoreError>;
}
