use std::collections::BTreeSet;

use domiva_core::models::{RugCategory, RugGroup};

use crate::CategoryRule;
use crate::scoring::NormalizedIndices;

/// Extensive Services: at least one extensive-service flag (IV
/// medication, IV feeding, suctioning, tracheostomy, ventilator) with
/// ADL sum ≥ 7. Patients below ADL 7 route to Special Care instead.
pub struct ExtensiveServices;

impl CategoryRule for ExtensiveServices {
    fn category(&self) -> RugCategory {
        RugCategory::ExtensiveServices
    }

    fn matches(&self, idx: &NormalizedIndices) -> bool {
        idx.extensive_service_count >= 1 && idx.adl_sum >= 7
    }

    fn group(&self, idx: &NormalizedIndices) -> RugGroup {
        match idx.extensive_service_count {
            count if count >= 4 => RugGroup::Se3,
            2..=3 => RugGroup::Se2,
            _ => RugGroup::Se1,
        }
    }

    fn triggers(&self, idx: &NormalizedIndices) -> BTreeSet<String> {
        idx.extensive
            .present()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
