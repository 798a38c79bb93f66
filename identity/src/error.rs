use thiserror::Error;

/// Reasons an identifier fails normalization.
///
/// Every variant is the `InvalidIdentifier` outcome from the caller's point
/// of view: re-prompt the user, nothing was mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("date segment must be exactly 6 ASCII digits")]
    MalformedDateSegment,

    #[error("gender marker must be a single digit in 1-4, got {0:?}")]
    InvalidGenderDigit(char),

    #[error("date segment encodes month {month} day {day}, outside 1-12 / 1-31")]
    DateOutOfRange { month: u8, day: u8 },
}
