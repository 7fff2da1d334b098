use std::collections::BTreeSet;

use domiva_core::models::{
    CareBundleTemplate, CareRole, Condition, RugCategory, RugGroup, ServiceRequirementSpec,
    ServiceType, flags,
};

/// Reduced Physical Function bundles: a heavier package for the top ADL
/// band and a light category fallback for everyone else.
pub fn templates() -> Vec<CareBundleTemplate> {
    vec![
        CareBundleTemplate {
            code: "PD1-DAILY-SUPPORT".to_string(),
            name: "Daily Personal Support".to_string(),
            group: Some(RugGroup::Pd1),
            category: RugCategory::ReducedPhysicalFunction,
            adl_sum_range: (11, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    7,
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
                ServiceRequirementSpec::weekly(
                    ServiceType::Physiotherapy,
                    CareRole::Physiotherapist,
                    1,
                    45,
                )
                .when(Condition::FlagPresent(flags::FALLS_RISK_FLAG.to_string())),
            ],
        },
        CareBundleTemplate {
            code: "PF-HOME-SUPPORT".to_string(),
            name: "Home Support".to_string(),
            group: None,
            category: RugCategory::ReducedPhysicalFunction,
            adl_sum_range: (4, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    3,
                    45,
                )
                .contracted(),
                ServiceRequirementSpec::weekly(
                    ServiceType::OccupationalTherapy,
                    CareRole::OccupationalTherapist,
                    1,
                    45,
                )
                .when(Condition::FlagPresent(flags::FALLS_RISK_FLAG.to_string())),
                ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 45)
                    .when(Condition::FlagPresent(flags::LIVES_ALONE_FLAG.to_string())),
            ],
        },
    ]
}
