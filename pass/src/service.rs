//! The service facade.

use crate::error::PassError;
use crate::session::Session;
use aurid_profile::{share_url, trust_score, ProfileEditor, ProfileUpdate};
use aurid_registration::{Registrar, SignupForm};
use aurid_store::{
    AccountStore, Badge, BadgeStore, CardSettings, Profile, ProfileStore, VerificationStore,
};
use aurid_types::{PassParams, Timestamp, VerificationKind};
use aurid_verification::{
    BadgeGrant, CodeGenerator, DeliveryChannel, IssuedVerification, VerificationProtocol,
};

/// One service object wiring the stores and channels together.
///
/// Every operation is a short request/response call; the current time is
/// passed in explicitly so hosts and tests control the clock the same way.
pub struct PassService<'a> {
    accounts: &'a dyn AccountStore,
    profiles: &'a dyn ProfileStore,
    verifications: &'a dyn VerificationStore,
    badges: &'a dyn BadgeStore,
    codes: &'a dyn CodeGenerator,
    delivery: &'a dyn DeliveryChannel,
    params: PassParams,
}

impl<'a> PassService<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        accounts: &'a dyn AccountStore,
        profiles: &'a dyn ProfileStore,
        verifications: &'a dyn VerificationStore,
        badges: &'a dyn BadgeStore,
        codes: &'a dyn CodeGenerator,
        delivery: &'a dyn DeliveryChannel,
        params: PassParams,
    ) -> Self {
        Self {
            accounts,
            profiles,
            verifications,
            badges,
            codes,
            delivery,
            params,
        }
    }

    /// Register a new user, returning the session for the created identity.
    pub fn sign_up(&self, form: &SignupForm, now: Timestamp) -> Result<Session, PassError> {
        let registrar = Registrar::new(self.accounts, self.profiles, self.params.clone());
        let profile = registrar.register(form, now)?;
        Ok(Session::new(profile.account_id, profile.id))
    }

    /// The caller's current profile.
    pub fn profile(&self, session: &Session) -> Result<Profile, PassError> {
        Ok(self.profiles.get_profile(&session.profile_id)?)
    }

    /// Update the profile's mutable fields.
    pub fn edit_profile(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> Result<Profile, PassError> {
        let editor = ProfileEditor::new(self.profiles, self.params.clone());
        Ok(editor.edit(&session.profile_id, update)?)
    }

    /// Replace the shareable card's settings.
    pub fn set_card_settings(
        &self,
        session: &Session,
        settings: CardSettings,
    ) -> Result<(), PassError> {
        let editor = ProfileEditor::new(self.profiles, self.params.clone());
        Ok(editor.set_card_settings(&session.profile_id, settings)?)
    }

    /// Issue a one-time code for a channel.
    pub fn request_verification(
        &self,
        session: &Session,
        kind: VerificationKind,
        now: Timestamp,
    ) -> Result<IssuedVerification, PassError> {
        Ok(self.protocol().issue(&session.profile_id, kind, now)?)
    }

    /// Confirm a submitted code for a channel.
    pub fn confirm_verification(
        &self,
        session: &Session,
        kind: VerificationKind,
        code: &str,
        now: Timestamp,
    ) -> Result<BadgeGrant, PassError> {
        Ok(self.protocol().confirm(&session.profile_id, kind, code, now)?)
    }

    /// All badges held by the caller.
    pub fn badges(&self, session: &Session) -> Result<Vec<Badge>, PassError> {
        Ok(self.badges.badges_for(&session.profile_id)?)
    }

    /// The caller's displayed trust percentage.
    pub fn trust_score(&self, session: &Session) -> Result<u8, PassError> {
        Ok(trust_score(&self.badges(session)?))
    }

    /// The public URL the caller's QR code points at.
    pub fn share_url(&self, session: &Session) -> Result<String, PassError> {
        Ok(share_url(&self.profile(session)?.handle))
    }

    fn protocol(&self) -> VerificationProtocol<'_> {
        VerificationProtocol::new(
            self.profiles,
            self.verifications,
            self.badges,
            self.codes,
            self.delivery,
            self.params.clone(),
        )
    }
}
