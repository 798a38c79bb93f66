//! One-time-code verification protocol.
//!
//! Proves control of a claimed contact channel (email or phone) and confirms
//! the channel's associated name matches the account holder's registered
//! real name before granting a trust badge.
//!
//! Per (profile, kind) attempt the state machine is:
//! pending -> verified (code match, unexpired, name match) or
//! pending -> failed (name mismatch only). Wrong or expired codes leave the
//! pending record untouched so the holder can retry or re-issue.

pub mod code;
pub mod delivery;
pub mod error;
pub mod protocol;

pub use code::{CodeGenerator, RandomCodeGen};
pub use delivery::{DeliveryChannel, LogDelivery};
pub use error::VerificationError;
pub use protocol::{BadgeGrant, IssuedVerification, VerificationProtocol};
