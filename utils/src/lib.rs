//! Shared utilities for the Aurid Pass identity core.

pub mod logging;
pub mod time;

pub use logging::init_tracing;
pub use time::format_duration;
