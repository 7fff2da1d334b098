use std::collections::BTreeSet;

use domiva_core::models::{
    CareBundleTemplate, CareRole, Condition, Measure, RugCategory, RugGroup,
    ServiceRequirementSpec, ServiceType, flags,
};

/// Clinically Complex bundles: a group template for the high-ADL tier
/// and a category fallback covering the rest.
pub fn templates() -> Vec<CareBundleTemplate> {
    vec![
        CareBundleTemplate {
            code: "CB2-COMPLEX-HIGH".to_string(),
            name: "Clinically Complex (High ADL)".to_string(),
            group: Some(RugGroup::Cb2),
            category: RugCategory::ClinicallyComplex,
            adl_sum_range: (11, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 4, 45),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    7,
                    45,
                )
                .contracted(),
                ServiceRequirementSpec::weekly(ServiceType::Dietetics, CareRole::Dietitian, 1, 30),
                ServiceRequirementSpec::per_plan(
                    ServiceType::RemoteMonitoring,
                    CareRole::CareCoordinator,
                    30,
                    ["Setup", "Discharge"],
                ),
                ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 45)
                    .when(Condition::FlagPresent(flags::LIVES_ALONE_FLAG.to_string())),
            ],
        },
        CareBundleTemplate {
            code: "CC-STANDARD".to_string(),
            name: "Clinically Complex".to_string(),
            group: None,
            category: RugCategory::ClinicallyComplex,
            adl_sum_range: (4, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 2, 45),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    3,
                    45,
                )
                .contracted(),
                ServiceRequirementSpec::per_plan(
                    ServiceType::RemoteMonitoring,
                    CareRole::CareCoordinator,
                    30,
                    ["Setup", "Discharge"],
                ),
                ServiceRequirementSpec::weekly(ServiceType::Dietetics, CareRole::Dietitian, 1, 30)
                    .when(Condition::IndexAtLeast {
                        measure: Measure::Chess,
                        min: 3,
                    }),
                ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 45)
                    .when(Condition::FlagPresent(flags::LIVES_ALONE_FLAG.to_string())),
            ],
        },
    ]
}
