use std::collections::BTreeSet;

use domiva_core::models::{RugCategory, RugGroup};

use crate::CategoryRule;
use crate::scoring::NormalizedIndices;

/// Impaired Cognition: CPS ≥ 3. Evaluated before Behaviour Problems, so
/// a patient at the CPS threshold with behaviours present classifies
/// here; the cascade order is the tie-break.
pub struct ImpairedCognition;

pub const CPS_THRESHOLD: u8 = 3;

impl CategoryRule for ImpairedCognition {
    fn category(&self) -> RugCategory {
        RugCategory::ImpairedCognition
    }

    fn matches(&self, idx: &NormalizedIndices) -> bool {
        idx.cps >= CPS_THRESHOLD
    }

    fn group(&self, idx: &NormalizedIndices) -> RugGroup {
        if (6..=10).contains(&idx.adl_sum) {
            RugGroup::Ib1
        } else if idx.adl_sum <= 5 && idx.iadl_count >= 1 {
            RugGroup::Ia2
        } else {
            RugGroup::Ia1
        }
    }

    fn triggers(&self, _idx: &NormalizedIndices) -> BTreeSet<String> {
        BTreeSet::from(["cps_3plus".to_string()])
    }
}
