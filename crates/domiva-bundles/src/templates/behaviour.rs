use std::collections::BTreeSet;

use domiva_core::models::{
    CareBundleTemplate, CareRole, Condition, Measure, RugCategory, ServiceRequirementSpec,
    ServiceType,
};

/// Behaviour Problems bundle: structured personal support and social
/// work, with OT behavioural strategies added when cognition is also
/// reduced (CPS 2; higher scores classify out of this category).
pub fn templates() -> Vec<CareBundleTemplate> {
    vec![CareBundleTemplate {
        code: "BP-STRUCTURED".to_string(),
        name: "Structured Behavioural Support".to_string(),
        group: None,
        category: RugCategory::BehaviourProblems,
        adl_sum_range: (4, 18),
        iadl_count_range: None,
        required_flags: BTreeSet::new(),
        plan_weeks: None,
        services: vec![
            ServiceRequirementSpec::weekly(
                ServiceType::PersonalSupport,
                CareRole::PersonalSupportWorker,
                5,
                45,
            )
            .contracted(),
            ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 1, 30),
            ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 60),
            ServiceRequirementSpec::weekly(
                ServiceType::OccupationalTherapy,
                CareRole::OccupationalTherapist,
                1,
                45,
            )
            .when(Condition::IndexAtLeast {
                measure: Measure::Cps,
                min: 2,
            }),
        ],
    }]
}
