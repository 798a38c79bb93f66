//! Abstract storage traits for the Aurid Pass identity core.
//!
//! The real persistence and auth layer is an external managed service. The
//! rest of the workspace depends only on these traits; backends (the managed
//! service adapter, in-memory for testing) implement them.

pub mod account;
pub mod badge;
pub mod error;
pub mod profile;
pub mod verification;

pub use account::{AccountRecord, AccountStore};
pub use badge::{Badge, BadgeMetadata, BadgeStore};
pub use error::StoreError;
pub use profile::{CardSettings, Profile, ProfileStore};
pub use verification::{
    VerificationId, VerificationMetadata, VerificationRecord, VerificationStore,
};
