use aurid_store::StoreError;
use aurid_types::VerificationKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerificationError {
    /// No pending record for the (profile, kind) pair. Issue a new code.
    #[error("no pending {0} verification")]
    NotFound(VerificationKind),

    /// Submitted code differs from the issued one. The record is untouched;
    /// the holder may retry.
    #[error("verification code does not match")]
    CodeMismatch,

    /// Past the expiry window. The record is untouched; a fresh code must
    /// be issued.
    #[error("verification code has expired")]
    Expired,

    /// The name snapshot taken at issuance no longer matches the profile's
    /// registered real name. Terminal for this record; no badge is granted.
    #[error("verified name does not match the registered real name")]
    NameMismatch,

    /// The profile has no address or number for the requested channel.
    #[error("profile has no {0} destination on file")]
    NoDestination(VerificationKind),

    #[error("code delivery failed: {0}")]
    Delivery(String),

    /// Store fault: treat the operation's state as unknown, not as a
    /// definitive success or failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
