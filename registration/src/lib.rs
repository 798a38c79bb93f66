//! Registration guard.
//!
//! Prevents a second account from registering with the same underlying
//! legal identity, without ever storing or transmitting the raw identifier.
//! The registrar validates the signup form, computes the identity
//! fingerprint, rejects duplicates, derives the biographic attributes, and
//! creates the account and profile as one compensated unit.

pub mod error;
pub mod form;
pub mod guard;
pub mod registrar;

pub use error::RegistrationError;
pub use form::SignupForm;
pub use guard::RegistrationGuard;
pub use registrar::Registrar;
