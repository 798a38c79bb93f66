//! Mutable-field editing for profiles.

use crate::categories::is_known_category;
use crate::error::ProfileError;
use aurid_store::{CardSettings, Profile, ProfileStore};
use aurid_types::{PassParams, ProfileId};
use std::collections::BTreeMap;

const TEMPLATES: &[&str] = &["basic", "modern", "minimal"];
const ACCENT_COLORS: &[&str] = &["blue", "black", "green", "purple", "red"];

/// A partial update of a profile's mutable fields. `None` leaves a field
/// unchanged; the write-once fields cannot be expressed here at all.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    /// `Some("")` clears the headline.
    pub headline: Option<String>,
    pub phone: Option<String>,
    /// Blank entries are dropped before the length check.
    pub links: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub visibility: Option<BTreeMap<String, bool>>,
}

/// Applies validated updates through the profile store.
pub struct ProfileEditor<'a> {
    profiles: &'a dyn ProfileStore,
    params: PassParams,
}

impl<'a> ProfileEditor<'a> {
    pub fn new(profiles: &'a dyn ProfileStore, params: PassParams) -> Self {
        Self { profiles, params }
    }

    /// Apply a partial update, returning the stored result.
    pub fn edit(
        &self,
        profile_id: &ProfileId,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self.profiles.get_profile(profile_id)?;
        self.apply(&mut profile, update)?;
        self.profiles.update_profile(&profile)?;
        tracing::debug!(%profile_id, "profile updated");
        Ok(profile)
    }

    /// Replace the card settings after validating template and color ids.
    pub fn set_card_settings(
        &self,
        profile_id: &ProfileId,
        settings: CardSettings,
    ) -> Result<(), ProfileError> {
        if !TEMPLATES.contains(&settings.template.as_str()) {
            return Err(ProfileError::UnknownTemplate(settings.template));
        }
        if !ACCENT_COLORS.contains(&settings.color.as_str()) {
            return Err(ProfileError::UnknownColor(settings.color));
        }
        let mut profile = self.profiles.get_profile(profile_id)?;
        profile.card_settings = settings;
        self.profiles.update_profile(&profile)?;
        Ok(())
    }

    fn apply(&self, profile: &mut Profile, update: ProfileUpdate) -> Result<(), ProfileError> {
        if let Some(name) = update.display_name {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(ProfileError::EmptyDisplayName);
            }
            profile.display_name = name;
        }
        if let Some(headline) = update.headline {
            let headline = headline.trim().to_owned();
            if headline.chars().count() > self.params.max_headline_chars {
                return Err(ProfileError::HeadlineTooLong {
                    max: self.params.max_headline_chars,
                });
            }
            profile.headline = if headline.is_empty() {
                None
            } else {
                Some(headline)
            };
        }
        if let Some(phone) = update.phone {
            profile.phone = phone;
        }
        if let Some(links) = update.links {
            let links: Vec<String> = links
                .into_iter()
                .map(|l| l.trim().to_owned())
                .filter(|l| !l.is_empty())
                .collect();
            if links.len() > self.params.max_links {
                return Err(ProfileError::TooManyLinks {
                    max: self.params.max_links,
                });
            }
            profile.links = links;
        }
        if let Some(categories) = update.categories {
            for id in &categories {
                if !is_known_category(id) {
                    return Err(ProfileError::UnknownCategory(id.clone()));
                }
            }
            profile.categories = categories;
        }
        if let Some(visibility) = update.visibility {
            profile.visibility = visibility;
        }
        Ok(())
    }
}
