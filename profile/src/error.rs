use aurid_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("handle must be at least {min} characters of lowercase letters, digits, or underscore")]
    InvalidHandle { min: usize },

    #[error("handle {0} is already taken")]
    HandleTaken(String),

    #[error("display name must not be empty")]
    EmptyDisplayName,

    #[error("headline exceeds {max} characters")]
    HeadlineTooLong { max: usize },

    #[error("at most {max} links are allowed")]
    TooManyLinks { max: usize },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown card template: {0}")]
    UnknownTemplate(String),

    #[error("unknown accent color: {0}")]
    UnknownColor(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
