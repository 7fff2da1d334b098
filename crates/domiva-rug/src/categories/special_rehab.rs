use std::collections::BTreeSet;

use domiva_core::models::{RugCategory, RugGroup};

use crate::CategoryRule;
use crate::scoring::NormalizedIndices;

/// Special Rehabilitation: combined PT/OT/SLP therapy of at least
/// 120 minutes over the last 7 days.
pub struct SpecialRehab;

pub const THERAPY_MINUTES_THRESHOLD: u32 = 120;

impl CategoryRule for SpecialRehab {
    fn category(&self) -> RugCategory {
        RugCategory::SpecialRehab
    }

    fn matches(&self, idx: &NormalizedIndices) -> bool {
        idx.therapy_minutes >= THERAPY_MINUTES_THRESHOLD
    }

    fn group(&self, idx: &NormalizedIndices) -> RugGroup {
        if idx.adl_sum >= 11 {
            RugGroup::Rb0
        } else if idx.iadl_count >= 2 {
            RugGroup::Ra2
        } else {
            RugGroup::Ra1
        }
    }

    fn triggers(&self, _idx: &NormalizedIndices) -> BTreeSet<String> {
        BTreeSet::from(["therapy_minutes_120".to_string()])
    }
}
