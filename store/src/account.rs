//! Authentication account storage trait.
//!
//! Accounts are owned by the external auth service; this is the narrow
//! surface the registration flow needs: create, compensating delete, lookup.

use crate::StoreError;
use aurid_types::{AccountId, Timestamp};
use serde::{Deserialize, Serialize};

/// The slice of an auth account visible to this core.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: AccountId,
    pub email: String,
    pub created_at: Timestamp,
}

pub trait AccountStore {
    /// Create an account for an email/password pair.
    ///
    /// Fails with [`StoreError::Duplicate`] if the email is already taken.
    fn create_account(&self, email: &str, password: &str) -> Result<AccountId, StoreError>;

    /// Delete an account. Used as the compensating step when profile
    /// creation fails after the account insert succeeded.
    fn delete_account(&self, id: &AccountId) -> Result<(), StoreError>;

    fn get_account(&self, id: &AccountId) -> Result<AccountRecord, StoreError>;
}
