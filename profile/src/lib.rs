//! Profile rules and editing.
//!
//! Validation of the public-facing profile surface (handles, links,
//! headlines, categories, card settings), short-code generation, and the
//! trust score computed from existence badges. The write-once identity
//! fields are never touched here; the store rejects any attempt.

pub mod categories;
pub mod editor;
pub mod error;
pub mod handle;
pub mod short_code;
pub mod trust;

pub use editor::{ProfileEditor, ProfileUpdate};
pub use error::ProfileError;
pub use handle::{normalize_handle, share_url, validate_handle};
pub use short_code::generate_short_code;
pub use trust::trust_score;
