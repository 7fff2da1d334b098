use std::collections::BTreeSet;

use domiva_core::models::{RugCategory, RugGroup};

use crate::CategoryRule;
use crate::scoring::NormalizedIndices;

/// Reduced Physical Function: the unconditional fallback, split purely by
/// ADL sum (with an IADL tier at the bottom of the scale).
pub struct ReducedPhysicalFunction;

impl CategoryRule for ReducedPhysicalFunction {
    fn category(&self) -> RugCategory {
        RugCategory::ReducedPhysicalFunction
    }

    fn matches(&self, _idx: &NormalizedIndices) -> bool {
        true
    }

    fn group(&self, idx: &NormalizedIndices) -> RugGroup {
        if idx.adl_sum >= 11 {
            RugGroup::Pd1
        } else if idx.adl_sum >= 9 {
            RugGroup::Pc1
        } else if idx.adl_sum >= 6 {
            RugGroup::Pb1
        } else if idx.iadl_count >= 1 {
            RugGroup::Pa2
        } else {
            RugGroup::Pa1
        }
    }

    fn triggers(&self, _idx: &NormalizedIndices) -> BTreeSet<String> {
        BTreeSet::new()
    }
}
