use std::collections::BTreeSet;

use domiva_core::models::{RugCategory, RugGroup};

use crate::CategoryRule;
use crate::scoring::NormalizedIndices;

/// Special Care: stage 3+ pressure ulcer, swallowing impairment, or
/// significant weight loss. Also receives the carve-out for
/// extensive-services patients with ADL sum ≤ 6, who are too low-ADL for
/// the Extensive Services category.
pub struct SpecialCare;

fn extensive_low_adl(idx: &NormalizedIndices) -> bool {
    idx.extensive_service_count >= 1 && idx.adl_sum <= 6
}

impl CategoryRule for SpecialCare {
    fn category(&self) -> RugCategory {
        RugCategory::SpecialCare
    }

    fn matches(&self, idx: &NormalizedIndices) -> bool {
        idx.pressure_ulcer_stage >= 3
            || idx.swallowing >= 2
            || idx.weight_loss
            || extensive_low_adl(idx)
    }

    fn group(&self, idx: &NormalizedIndices) -> RugGroup {
        if idx.adl_sum >= 14 {
            RugGroup::Ssb
        } else {
            RugGroup::Ssa
        }
    }

    fn triggers(&self, idx: &NormalizedIndices) -> BTreeSet<String> {
        let mut flags = BTreeSet::new();
        if idx.pressure_ulcer_stage >= 3 {
            flags.insert("pressure_ulcer_stage3plus".to_string());
        }
        if idx.swallowing >= 2 {
            flags.insert("swallowing_impairment".to_string());
        }
        if idx.weight_loss {
            flags.insert("weight_loss".to_string());
        }
        if extensive_low_adl(idx) {
            flags.insert("extensive_services_low_adl".to_string());
        }
        flags
    }
}
