//! Identity normalizer.
//!
//! Deterministically converts a national identification number (a 6-digit
//! `YYMMDD` date segment plus a 1-digit century/gender marker) into
//! structured biographic attributes, and derives the one-way fingerprint
//! used to detect duplicate registrations.
//!
//! Everything here is a pure function over input strings. The raw identifier
//! digits never leave this crate in any persisted form; only the fingerprint
//! does.

pub mod error;
pub mod normalizer;

pub use error::IdentityError;
pub use normalizer::{identity_fingerprint, parse_birth_date, parse_gender, NationalId};
