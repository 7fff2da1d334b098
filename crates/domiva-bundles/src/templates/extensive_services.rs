use std::collections::BTreeSet;

use domiva_core::models::{
    CareBundleTemplate, CareRole, Condition, Measure, RugCategory, RugGroup,
    ServiceRequirementSpec, ServiceType, flags,
};

/// Extensive Services bundles: nursing-heavy packages for patients on
/// IV therapy, suctioning, tracheostomy, or ventilator support.
pub fn templates() -> Vec<CareBundleTemplate> {
    vec![
        CareBundleTemplate {
            code: "SE3-TECH-COMPLEX".to_string(),
            name: "Complex Technology Care".to_string(),
            group: Some(RugGroup::Se3),
            category: RugCategory::ExtensiveServices,
            adl_sum_range: (7, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 7, 60),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    7,
                    60,
                )
                .contracted(),
                ServiceRequirementSpec::weekly(
                    ServiceType::OccupationalTherapy,
                    CareRole::OccupationalTherapist,
                    1,
                    45,
                ),
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
            ],
        },
        CareBundleTemplate {
            code: "SE2-TECH".to_string(),
            name: "Technology-Supported Care".to_string(),
            group: Some(RugGroup::Se2),
            category: RugCategory::ExtensiveServices,
            adl_sum_range: (7, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 5, 45),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    7,
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
                    .when(Condition::FlagPresent(
                        flags::HAS_NUTRITION_RISK_FLAG.to_string(),
                    )),
            ],
        },
        CareBundleTemplate {
            code: "SE1-CLINICAL".to_string(),
            name: "Clinical Support at Home".to_string(),
            group: Some(RugGroup::Se1),
            category: RugCategory::ExtensiveServices,
            adl_sum_range: (7, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 3, 45),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    5,
                    45,
                )
                .contracted(),
                ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 45)
                    .when(Condition::FlagPresent(flags::LIVES_ALONE_FLAG.to_string())),
            ],
        },
    ]
}
