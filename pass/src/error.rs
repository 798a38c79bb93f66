use aurid_profile::ProfileError;
use aurid_registration::RegistrationError;
use aurid_store::StoreError;
use aurid_verification::VerificationError;
use thiserror::Error;

/// Every typed outcome a host can see from the service facade.
#[derive(Debug, Error)]
pub enum PassError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
