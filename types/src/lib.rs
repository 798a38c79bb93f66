//! Fundamental types for the Aurid Pass identity core.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: ids, the identity fingerprint, derived biographic attributes,
//! timestamps, verification state enums, and tunable parameters.

pub mod id;
pub mod identity;
pub mod params;
pub mod state;
pub mod time;

pub use id::{AccountId, ProfileId};
pub use identity::{BirthDate, Gender, IdentityHash};
pub use params::PassParams;
pub use state::{VerificationKind, VerificationStatus};
pub use time::Timestamp;
