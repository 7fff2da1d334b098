use std::collections::BTreeSet;

use domiva_core::models::{RugCategory, RugGroup};

use crate::CategoryRule;
use crate::scoring::NormalizedIndices;

/// Clinically Complex: unstable health (CHESS ≥ 3), dialysis,
/// chemotherapy, oxygen therapy, or daily severe pain. Dialysis belongs
/// here, never in the extensive-services count.
pub struct ClinicallyComplex;

impl CategoryRule for ClinicallyComplex {
    fn category(&self) -> RugCategory {
        RugCategory::ClinicallyComplex
    }

    fn matches(&self, idx: &NormalizedIndices) -> bool {
        idx.chess >= 3
            || idx.dialysis
            || idx.chemotherapy
            || idx.oxygen_therapy
            || idx.pain_score >= 3
    }

    fn group(&self, idx: &NormalizedIndices) -> RugGroup {
        if idx.adl_sum >= 11 {
            RugGroup::Cb2
        } else if idx.adl_sum >= 6 {
            RugGroup::Cb1
        } else if idx.iadl_count >= 1 {
            RugGroup::Ca2
        } else {
            RugGroup::Ca1
        }
    }

    fn triggers(&self, idx: &NormalizedIndices) -> BTreeSet<String> {
        let mut flags = BTreeSet::new();
        if idx.chess >= 3 {
            flags.insert("chess_3plus".to_string());
        }
        if idx.dialysis {
            flags.insert("dialysis".to_string());
        }
        if idx.chemotherapy {
            flags.insert("chemotherapy".to_string());
        }
        if idx.oxygen_therapy {
            flags.insert("oxygen_therapy".to_string());
        }
        if idx.pain_score >= 3 {
            flags.insert("daily_severe_pain".to_string());
        }
        flags
    }
}
