use aurid_identity::IdentityError;
use aurid_profile::ProfileError;
use aurid_store::StoreError;
use aurid_types::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("email is required")]
    MissingEmail,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("password and confirmation do not match")]
    PasswordMismatch,

    #[error("real name is required")]
    MissingRealName,

    #[error("phone number must contain at least {min} digits")]
    PhoneTooShort { min: usize },

    #[error("terms and privacy consent are both required")]
    MissingConsent,

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentityError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// This identity is already registered. Never retried or bypassed;
    /// no account or profile was created and no raw identifier retained.
    #[error("this identity is already registered")]
    DuplicateIdentity,

    /// Store fault during registration. Includes duplicate-check lookup
    /// failures: uniqueness could not be confirmed, so the attempt fails
    /// closed rather than proceeding.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Profile creation failed and the compensating account delete also
    /// failed, leaving an orphaned account for deferred cleanup.
    #[error("account {account} orphaned after profile creation failed: {source}")]
    OrphanedAccount {
        account: AccountId,
        source: StoreError,
    },
}
