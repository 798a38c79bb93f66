//! Derivation of birth date, gender, and the identity fingerprint.

use crate::error::IdentityError;
use aurid_crypto::hash_identity_fragment;
use aurid_types::{BirthDate, Gender, IdentityHash};
use std::fmt;

/// A syntactically valid national identifier fragment: 6 date digits plus
/// the century/gender marker.
///
/// Validation happens once at construction; the derivation methods can then
/// no longer fail. Holds the raw digits only transiently — hosts must drop
/// this value as soon as the fingerprint and attributes are derived, and it
/// deliberately redacts itself from `Debug` output.
#[derive(Clone)]
pub struct NationalId {
    date_segment: String,
    gender_digit: char,
}

impl NationalId {
    pub fn new(date_segment: &str, gender_digit: char) -> Result<Self, IdentityError> {
        if date_segment.len() != 6 || !date_segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentityError::MalformedDateSegment);
        }
        if !matches!(gender_digit, '1'..='4') {
            return Err(IdentityError::InvalidGenderDigit(gender_digit));
        }
        let month = two_digits(date_segment, 2);
        let day = two_digits(date_segment, 4);
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(IdentityError::DateOutOfRange { month, day });
        }
        Ok(Self {
            date_segment: date_segment.to_owned(),
            gender_digit,
        })
    }

    /// The full birth date, with the century resolved from the gender digit:
    /// 1 and 2 mean the 1900s, 3 and 4 the 2000s.
    pub fn birth_date(&self) -> BirthDate {
        let yy = two_digits(&self.date_segment, 0) as u16;
        let century = match self.gender_digit {
            '1' | '2' => 1900,
            _ => 2000,
        };
        BirthDate::new(
            century + yy,
            two_digits(&self.date_segment, 2),
            two_digits(&self.date_segment, 4),
        )
    }

    pub fn gender(&self) -> Gender {
        match self.gender_digit {
            '1' | '3' => Gender::Male,
            _ => Gender::Female,
        }
    }

    /// The one-way fingerprint of the 7-character fragment.
    ///
    /// This is the only identity-derived value that may ever be persisted
    /// or compared.
    pub fn fingerprint(&self) -> IdentityHash {
        let fragment = format!("{}{}", self.date_segment, self.gender_digit);
        hash_identity_fragment(&fragment)
    }
}

impl fmt::Debug for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NationalId(redacted)")
    }
}

fn two_digits(s: &str, at: usize) -> u8 {
    // Caller guarantees `s` is ASCII digits and long enough.
    let bytes = s.as_bytes();
    (bytes[at] - b'0') * 10 + (bytes[at + 1] - b'0')
}

/// Derive the birth date from an identifier's parts.
pub fn parse_birth_date(date_segment: &str, gender_digit: char) -> Result<BirthDate, IdentityError> {
    Ok(NationalId::new(date_segment, gender_digit)?.birth_date())
}

/// Derive the gender from an identifier's gender digit.
pub fn parse_gender(gender_digit: char) -> Result<Gender, IdentityError> {
    match gender_digit {
        '1' | '3' => Ok(Gender::Male),
        '2' | '4' => Ok(Gender::Female),
        other => Err(IdentityError::InvalidGenderDigit(other)),
    }
}

/// Derive the deduplication fingerprint from an identifier's parts.
pub fn identity_fingerprint(
    date_segment: &str,
    gender_digit: char,
) -> Result<IdentityHash, IdentityError> {
    Ok(NationalId::new(date_segment, gender_digit)?.fingerprint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_1990s_female() {
        let d = parse_birth_date("920515", '2').unwrap();
        assert_eq!(d.to_string(), "1992-05-15");
        assert_eq!(parse_gender('2').unwrap(), Gender::Female);
    }

    #[test]
    fn derives_2000s_male() {
        let d = parse_birth_date("050203", '3').unwrap();
        assert_eq!(d.to_string(), "2005-02-03");
        assert_eq!(parse_gender('3').unwrap(), Gender::Male);
    }

    #[test]
    fn gender_digit_out_of_range_rejected() {
        assert_eq!(
            parse_gender('9'),
            Err(IdentityError::InvalidGenderDigit('9'))
        );
        assert!(parse_birth_date("920515", '9').is_err());
        assert!(identity_fingerprint("920515", '0').is_err());
    }

    #[test]
    fn malformed_date_segment_rejected() {
        assert_eq!(
            NationalId::new("92051", '2').unwrap_err(),
            IdentityError::MalformedDateSegment
        );
        assert_eq!(
            NationalId::new("92051x", '2').unwrap_err(),
            IdentityError::MalformedDateSegment
        );
        assert_eq!(
            NationalId::new("9205155", '2').unwrap_err(),
            IdentityError::MalformedDateSegment
        );
    }

    #[test]
    fn month_and_day_are_range_checked() {
        assert_eq!(
            NationalId::new("921301", '2').unwrap_err(),
            IdentityError::DateOutOfRange { month: 13, day: 1 }
        );
        assert_eq!(
            NationalId::new("920132", '2').unwrap_err(),
            IdentityError::DateOutOfRange { month: 1, day: 32 }
        );
        // Not validated against a real calendar: Feb 30 passes.
        assert!(NationalId::new("920230", '2').is_ok());
    }

    #[test]
    fn fingerprint_deterministic() {
        let a = identity_fingerprint("920515", '2').unwrap();
        let b = identity_fingerprint("920515", '2').unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fingerprint_distinct_for_distinct_inputs() {
        let a = identity_fingerprint("920515", '2').unwrap();
        let b = identity_fingerprint("920515", '4').unwrap();
        let c = identity_fingerprint("920516", '2').unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn debug_never_prints_digits() {
        let id = NationalId::new("920515", '2').unwrap();
        let shown = format!("{:?}", id);
        assert!(!shown.contains("920515"));
    }
}
