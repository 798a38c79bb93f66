//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies of the core (clock, code generation, code delivery,
//! the managed persistence service) are abstracted behind traits. This crate
//! provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the network or a real backend
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod codes;
pub mod delivery;
pub mod store;

pub use clock::NullClock;
pub use codes::NullCodeGen;
pub use delivery::NullDelivery;
pub use store::MemoryStore;
