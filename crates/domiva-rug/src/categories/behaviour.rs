use std::collections::BTreeSet;

use domiva_core::models::{RugCategory, RugGroup};

use crate::CategoryRule;
use crate::scoring::NormalizedIndices;

/// Behaviour Problems: any behaviour domain present (score ≥ 2). Sits
/// below Impaired Cognition in the cascade, so it only receives patients
/// with CPS < 3.
pub struct BehaviourProblems;

impl CategoryRule for BehaviourProblems {
    fn category(&self) -> RugCategory {
        RugCategory::BehaviourProblems
    }

    fn matches(&self, idx: &NormalizedIndices) -> bool {
        idx.behaviour.any_present()
    }

    fn group(&self, idx: &NormalizedIndices) -> RugGroup {
        if (6..=10).contains(&idx.adl_sum) {
            RugGroup::Bb1
        } else if idx.adl_sum <= 5 && idx.iadl_count >= 1 {
            RugGroup::Ba2
        } else {
            RugGroup::Ba1
        }
    }

    fn triggers(&self, idx: &NormalizedIndices) -> BTreeSet<String> {
        idx.behaviour
            .present_domains()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
