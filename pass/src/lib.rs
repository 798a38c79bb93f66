//! Aurid Pass service facade.
//!
//! Ties the registration guard, profile editor, and verification protocol
//! together behind one service type. Callers authenticate elsewhere and
//! carry an explicit [`Session`] value into every operation — there is no
//! ambient session state.

pub mod error;
pub mod service;
pub mod session;

pub use error::PassError;
pub use service::PassService;
pub use session::Session;
