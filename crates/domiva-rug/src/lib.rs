//! domiva-rug
//!
//! RUG-III/HC classification engine: assessment normalization plus the
//! priority-ordered category cascade. Pure decision logic with no
//! persistence dependency, safe to call concurrently.

pub mod categories;
pub mod items;
pub mod scoring;

use std::collections::BTreeSet;

use domiva_core::models::{Classification, RawAssessment, RugCategory, RugGroup};

use scoring::NormalizedIndices;

/// One category of the RUG decision cascade.
///
/// Categories are evaluated strictly top-to-bottom; the first whose
/// `matches` predicate holds wins, so a patient qualifying for several
/// categories always lands in the highest-priority one.
pub trait CategoryRule: Send + Sync {
    /// The category this rule classifies into.
    fn category(&self) -> RugCategory;

    /// Whether the category's defining predicate holds.
    fn matches(&self, idx: &NormalizedIndices) -> bool;

    /// The group within this category for the given indices. Only
    /// meaningful when `matches` holds; splits are closed ranges on the
    /// boundary values so every ADL sum 4–18 maps to exactly one group.
    fn group(&self, idx: &NormalizedIndices) -> RugGroup;

    /// The clinical predicates that fired, for display and audit.
    fn triggers(&self, idx: &NormalizedIndices) -> BTreeSet<String>;
}

/// The cascade in priority order. Reduced Physical Function matches
/// unconditionally, so the cascade is total.
pub fn cascade() -> Vec<Box<dyn CategoryRule>> {
    vec![
        Box::new(categories::special_rehab::SpecialRehab),
        Box::new(categories::extensive_services::ExtensiveServices),
        Box::new(categories::special_care::SpecialCare),
        Box::new(categories::clinically_complex::ClinicallyComplex),
        Box::new(categories::impaired_cognition::ImpairedCognition),
        Box::new(categories::behaviour::BehaviourProblems),
        Box::new(categories::physical_function::ReducedPhysicalFunction),
    ]
}

/// Classify normalized indices into a RUG group.
///
/// Deterministic and total; same indices always produce the same
/// classification.
pub fn classify(idx: &NormalizedIndices) -> Classification {
    for rule in cascade() {
        if rule.matches(idx) {
            return classification_for(rule.as_ref(), idx);
        }
    }
    // The fallback category matches everything, so the loop above
    // always returns.
    classification_for(&categories::physical_function::ReducedPhysicalFunction, idx)
}

/// Normalize and classify in one step.
pub fn classify_raw(raw: &RawAssessment) -> Classification {
    classify(&scoring::normalize(raw))
}

fn classification_for(rule: &dyn CategoryRule, idx: &NormalizedIndices) -> Classification {
    let group = rule.group(idx);
    Classification {
        group,
        category: rule.category(),
        numeric_rank: group.numeric_rank(),
        trigger_flags: rule.triggers(idx),
    }
}
