//! The end-to-end registration flow.

use crate::error::RegistrationError;
use crate::form::SignupForm;
use crate::guard::RegistrationGuard;
use aurid_identity::NationalId;
use aurid_profile::generate_short_code;
use aurid_store::{AccountStore, CardSettings, Profile, ProfileStore, StoreError};
use aurid_types::{PassParams, ProfileId, Timestamp};
use rand::RngCore;
use std::collections::BTreeMap;

/// Creates accounts and profiles as one compensated unit.
pub struct Registrar<'a> {
    accounts: &'a dyn AccountStore,
    profiles: &'a dyn ProfileStore,
    params: PassParams,
}

impl<'a> Registrar<'a> {
    pub fn new(
        accounts: &'a dyn AccountStore,
        profiles: &'a dyn ProfileStore,
        params: PassParams,
    ) -> Self {
        Self {
            accounts,
            profiles,
            params,
        }
    }

    /// Register a new user.
    ///
    /// Order of operations: form constraints, identifier normalization,
    /// duplicate fingerprint check (fail closed), account creation, profile
    /// creation. If the profile insert fails after the account insert
    /// succeeded, the account is deleted again; if even that fails, the
    /// orphan is reported for deferred cleanup.
    pub fn register(
        &self,
        form: &SignupForm,
        now: Timestamp,
    ) -> Result<Profile, RegistrationError> {
        let handle = form.validate(&self.params)?;

        let national_id = NationalId::new(&form.id_date_segment, form.id_gender_digit)?;
        let fingerprint = national_id.fingerprint();

        let guard = RegistrationGuard::new(self.profiles);
        if guard.check_duplicate(&fingerprint)? {
            tracing::info!(%fingerprint, "registration rejected: duplicate identity");
            return Err(RegistrationError::DuplicateIdentity);
        }

        let birth_date = national_id.birth_date();
        let gender = national_id.gender();
        drop(national_id);

        let account_id = self.accounts.create_account(&form.email, &form.password)?;

        let display_name = if form.display_name.trim().is_empty() {
            handle.clone()
        } else {
            form.display_name.trim().to_owned()
        };

        let profile = Profile {
            id: random_profile_id(),
            account_id,
            handle,
            display_name,
            real_name: form.real_name.trim().to_owned(),
            birth_date,
            gender,
            identity_hash: fingerprint,
            phone: form.phone.clone(),
            email: form.email.clone(),
            links: Vec::new(),
            headline: None,
            categories: form.categories.clone(),
            visibility: BTreeMap::new(),
            short_code: generate_short_code(self.params.short_code_len),
            card_settings: CardSettings::default(),
            created_at: now,
        };

        if let Err(create_err) = self.profiles.create_profile(&profile) {
            tracing::warn!(%account_id, error = %create_err, "profile insert failed, rolling back account");
            if let Err(rollback_err) = self.accounts.delete_account(&account_id) {
                tracing::error!(%account_id, error = %rollback_err, "account rollback failed");
                return Err(RegistrationError::OrphanedAccount {
                    account: account_id,
                    source: rollback_err,
                });
            }
            // A uniqueness collision at insert time means the pre-check
            // lost a race: surface it as the duplicate outcome.
            return Err(match create_err {
                StoreError::Duplicate(key) if key.contains("identity_hash") => {
                    RegistrationError::DuplicateIdentity
                }
                other => RegistrationError::Store(other),
            });
        }

        tracing::info!(profile_id = %profile.id, handle = %profile.handle, "registration complete");
        Ok(profile)
    }
}

fn random_profile_id() -> ProfileId {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    ProfileId::new(bytes)
}
