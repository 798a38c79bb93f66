//! The enumerated profile category tags.

/// Every category id a profile may carry.
pub const CATEGORY_IDS: &[&str] = &[
    "creator",
    "developer",
    "designer",
    "freelancer",
    "student",
    "local_biz",
    "artist",
    "writer",
    "photographer",
    "marketer",
    "educator",
    "researcher",
    "engineer",
    "medical",
    "farmer",
    "other",
];

pub fn is_known_category(id: &str) -> bool {
    CATEGORY_IDS.contains(&id)
}
