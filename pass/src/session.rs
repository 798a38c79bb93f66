//! Explicit session state.

use aurid_types::{AccountId, ProfileId};

/// Who is acting. Produced by signup (or by the host's login flow) and
/// passed explicitly to every service operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub account_id: AccountId,
    pub profile_id: ProfileId,
}

impl Session {
    pub fn new(account_id: AccountId, profile_id: ProfileId) -> Self {
        Self {
            account_id,
            profile_id,
        }
    }
}
