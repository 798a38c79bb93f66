//! The issue/confirm protocol engine.

use crate::code::CodeGenerator;
use crate::delivery::DeliveryChannel;
use crate::error::VerificationError;
use aurid_store::{
    Badge, BadgeMetadata, BadgeStore, ProfileStore, VerificationId, VerificationMetadata,
    VerificationRecord, VerificationStore,
};
use aurid_types::{PassParams, ProfileId, Timestamp, VerificationKind, VerificationStatus};

/// What `issue` hands back to the caller: enough for the UI to show where
/// the code went and when it lapses. The code itself travels only through
/// the delivery channel.
#[derive(Clone, Debug)]
pub struct IssuedVerification {
    pub id: VerificationId,
    pub kind: VerificationKind,
    pub destination: String,
    pub expires_at: Timestamp,
}

/// Proof of a successful confirmation; describes the badge that was created.
#[derive(Clone, Debug)]
pub struct BadgeGrant {
    pub profile_id: ProfileId,
    pub kind: VerificationKind,
    pub destination: String,
    pub verified_at: Timestamp,
}

/// The verification protocol engine.
///
/// Holds no state of its own; each operation is a short request/response
/// sequence against the stores, with the current time passed in explicitly.
pub struct VerificationProtocol<'a> {
    profiles: &'a dyn ProfileStore,
    verifications: &'a dyn VerificationStore,
    badges: &'a dyn BadgeStore,
    codes: &'a dyn CodeGenerator,
    delivery: &'a dyn DeliveryChannel,
    params: PassParams,
}

impl<'a> VerificationProtocol<'a> {
    pub fn new(
        profiles: &'a dyn ProfileStore,
        verifications: &'a dyn VerificationStore,
        badges: &'a dyn BadgeStore,
        codes: &'a dyn CodeGenerator,
        delivery: &'a dyn DeliveryChannel,
        params: PassParams,
    ) -> Self {
        Self {
            profiles,
            verifications,
            badges,
            codes,
            delivery,
            params,
        }
    }

    /// Issue a fresh one-time code for a channel.
    ///
    /// Creates a new pending record snapshotting the profile's current
    /// `real_name`, and hands the code to the delivery channel. Any older
    /// pending record for the same (profile, kind) becomes implicitly dead:
    /// `confirm` only ever consults the most recent one.
    pub fn issue(
        &self,
        profile_id: &ProfileId,
        kind: VerificationKind,
        now: Timestamp,
    ) -> Result<IssuedVerification, VerificationError> {
        let profile = self.profiles.get_profile(profile_id)?;

        let destination = match kind {
            VerificationKind::Email => profile.email.clone(),
            VerificationKind::Phone => profile.phone.clone(),
        };
        if destination.is_empty() {
            return Err(VerificationError::NoDestination(kind));
        }

        let code = self.codes.numeric_code(self.params.code_length);
        let expires_at = now.plus_secs(self.params.code_ttl_secs);

        let id = self.verifications.insert_verification(VerificationRecord {
            profile_id: *profile_id,
            kind,
            status: VerificationStatus::Pending,
            verified_name: profile.real_name.clone(),
            metadata: VerificationMetadata {
                destination: destination.clone(),
                code: code.clone(),
                expires_at,
            },
            created_at: now,
            verified_at: None,
        })?;

        self.delivery
            .deliver_code(kind, &destination, &code)
            .map_err(VerificationError::Delivery)?;

        tracing::info!(
            %profile_id, %kind, %id,
            ttl = %aurid_utils::format_duration(self.params.code_ttl_secs),
            "verification code issued"
        );

        Ok(IssuedVerification {
            id,
            kind,
            destination,
            expires_at,
        })
    }

    /// Confirm a submitted code against the most recently issued pending
    /// record for (profile, kind).
    ///
    /// Wrong-code and expired-code outcomes leave the record pending so the
    /// same code can be retried until expiry. A name mismatch is terminal:
    /// the record moves to `failed` and no badge is granted. On success the
    /// record moves to `verified`, `verified_at` is set, and exactly one
    /// badge is created.
    pub fn confirm(
        &self,
        profile_id: &ProfileId,
        kind: VerificationKind,
        submitted_code: &str,
        now: Timestamp,
    ) -> Result<BadgeGrant, VerificationError> {
        let (id, record) = self
            .verifications
            .latest_pending(profile_id, kind)?
            .ok_or(VerificationError::NotFound(kind))?;

        if record.metadata.code != submitted_code {
            tracing::debug!(%profile_id, %kind, %id, "confirm rejected: code mismatch");
            return Err(VerificationError::CodeMismatch);
        }

        if now > record.metadata.expires_at {
            tracing::debug!(%profile_id, %kind, %id, "confirm rejected: code expired");
            return Err(VerificationError::Expired);
        }

        let profile = self.profiles.get_profile(profile_id)?;
        if record.verified_name != profile.real_name {
            self.verifications.set_verification_status(
                id,
                VerificationStatus::Failed,
                None,
            )?;
            tracing::warn!(%profile_id, %kind, %id, "confirm failed: real-name mismatch");
            return Err(VerificationError::NameMismatch);
        }

        self.verifications.set_verification_status(
            id,
            VerificationStatus::Verified,
            Some(now),
        )?;

        let grant = BadgeGrant {
            profile_id: *profile_id,
            kind,
            destination: record.metadata.destination.clone(),
            verified_at: now,
        };
        self.badges.insert_badge(existence_badge(&grant))?;

        tracing::info!(%profile_id, %kind, %id, "verification confirmed, badge granted");
        Ok(grant)
    }
}

/// The existence badge created for a grant.
fn existence_badge(grant: &BadgeGrant) -> Badge {
    let (name, icon) = match grant.kind {
        VerificationKind::Email => ("Email verified", "mail"),
        VerificationKind::Phone => ("Phone verified", "call"),
    };
    Badge {
        profile_id: grant.profile_id,
        badge_type: "existence".to_owned(),
        name: name.to_owned(),
        icon: icon.to_owned(),
        color: "#2563EB".to_owned(),
        metadata: BadgeMetadata {
            kind: grant.kind,
            destination: grant.destination.clone(),
            verified_at: grant.verified_at,
        },
    }
}
