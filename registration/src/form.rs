//! Signup form constraints.

use crate::error::RegistrationError;
use aurid_profile::{normalize_handle, validate_handle};
use aurid_types::PassParams;

/// Everything a user submits at signup. The identifier digits live here
/// only for the duration of the registration call and are never persisted;
/// `Debug` redacts them.
#[derive(Clone)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub real_name: String,
    /// First 6 digits of the national identifier (`YYMMDD`).
    pub id_date_segment: String,
    /// The 1-digit century/gender marker.
    pub id_gender_digit: char,
    pub phone: String,
    pub handle: String,
    pub display_name: String,
    pub categories: Vec<String>,
    pub agreed_to_terms: bool,
    pub agreed_to_privacy: bool,
}

impl SignupForm {
    /// Check every form constraint, returning the normalized handle.
    ///
    /// Identifier syntax is validated later by the normalizer; this covers
    /// the rest: credentials, name, phone, consent, handle.
    pub fn validate(&self, params: &PassParams) -> Result<String, RegistrationError> {
        if self.email.trim().is_empty() {
            return Err(RegistrationError::MissingEmail);
        }
        if self.password.len() < params.min_password_len {
            return Err(RegistrationError::PasswordTooShort {
                min: params.min_password_len,
            });
        }
        if self.password != self.password_confirm {
            return Err(RegistrationError::PasswordMismatch);
        }
        if self.real_name.trim().is_empty() {
            return Err(RegistrationError::MissingRealName);
        }
        if self.phone.chars().filter(|c| c.is_ascii_digit()).count() < params.min_phone_digits {
            return Err(RegistrationError::PhoneTooShort {
                min: params.min_phone_digits,
            });
        }
        if !self.agreed_to_terms || !self.agreed_to_privacy {
            return Err(RegistrationError::MissingConsent);
        }
        let handle = normalize_handle(&self.handle);
        validate_handle(&handle, params.min_handle_len)?;
        Ok(handle)
    }
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("handle", &self.handle)
            .field("id", &"redacted")
            .finish_non_exhaustive()
    }
}
