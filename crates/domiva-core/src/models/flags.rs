//! Canonical patient context flags.
//!
//! Supplied by the patient/care-plan collaborator and matched against
//! template conditions and required-flag sets. Kept in one place so the
//! catalog, the composer, and the frontend agree on spellings.

pub const HAS_WOUND_FLAG: &str = "has_wound_flag";
pub const HAS_RESPIRATORY_FLAG: &str = "has_respiratory_flag";
pub const HAS_SWALLOWING_FLAG: &str = "has_swallowing_flag";
pub const HAS_NUTRITION_RISK_FLAG: &str = "has_nutrition_risk_flag";
pub const LIVES_ALONE_FLAG: &str = "lives_alone_flag";
pub const HAS_CAREGIVER_FLAG: &str = "has_caregiver_flag";
pub const FALLS_RISK_FLAG: &str = "falls_risk_flag";
pub const PALLIATIVE_FLAG: &str = "palliative_flag";

/// All recognized flags, for config validation and frontend pickers.
pub fn known_flags() -> &'static [&'static str] {
    &[
        HAS_WOUND_FLAG,
        HAS_RESPIRATORY_FLAG,
        HAS_SWALLOWING_FLAG,
        HAS_NUTRITION_RISK_FLAG,
        LIVES_ALONE_FLAG,
        HAS_CAREGIVER_FLAG,
        FALLS_RISK_FLAG,
        PALLIATIVE_FLAG,
    ]
}
