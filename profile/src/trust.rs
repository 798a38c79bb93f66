//! Displayed trust indicator computed from existence badges.

use aurid_store::Badge;
use aurid_types::VerificationKind;

/// Percentage trust score: each distinct verified channel contributes 25,
/// capped at 100. Repeat badges for the same channel do not stack.
pub fn trust_score(badges: &[Badge]) -> u8 {
    let mut kinds: Vec<VerificationKind> = badges
        .iter()
        .filter(|b| b.badge_type == "existence")
        .map(|b| b.metadata.kind)
        .collect();
    kinds.sort_by_key(|k| k.as_str());
    kinds.dedup();
    (kinds.len() as u8).saturating_mul(25).min(100)
}
