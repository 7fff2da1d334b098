use std::collections::BTreeSet;

use domiva_core::models::{
    CareBundleTemplate, CareRole, Condition, RugCategory, ServiceRequirementSpec, ServiceType,
    flags,
};

/// Impaired Cognition bundle: supervision-oriented personal support with
/// nursing oversight, one template for the whole category.
pub fn templates() -> Vec<CareBundleTemplate> {
    vec![CareBundleTemplate {
        code: "IC-SUPERVISED".to_string(),
        name: "Supported Daily Living".to_string(),
        group: None,
        category: RugCategory::ImpairedCognition,
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
            ServiceRequirementSpec::weekly(
                ServiceType::OccupationalTherapy,
                CareRole::OccupationalTherapist,
                1,
                45,
            ),
            ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 60)
                .when(Condition::FlagPresent(flags::LIVES_ALONE_FLAG.to_string())),
        ],
    }]
}
