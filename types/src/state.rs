//! Verification state enums shared between the store and the protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which contact channel a verification attempt proves control of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationKind {
    Email,
    Phone,
}

impl VerificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationKind::Email => "email",
            VerificationKind::Phone => "phone",
        }
    }
}

impl fmt::Display for VerificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a verification attempt.
///
/// `Pending` is the initial state. `Verified` and `Failed` are terminal;
/// no further transitions occur once a record reaches either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Code issued, awaiting confirmation.
    Pending,
    /// Code confirmed and the real-name check passed.
    Verified,
    /// Real-name check failed. Only a name mismatch reaches this state;
    /// wrong or expired codes leave the record pending.
    Failed,
}

impl VerificationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, VerificationStatus::Verified | VerificationStatus::Failed)
    }
}
