use std::collections::BTreeSet;

use domiva_core::models::{
    CareBundleTemplate, CareRole, Condition, RugCategory, RugGroup, ServiceRequirementSpec,
    ServiceType, flags,
};

/// Special Rehabilitation bundles. All three groups carry a therapy core;
/// intensity scales with the ADL tier.
pub fn templates() -> Vec<CareBundleTemplate> {
    vec![
        CareBundleTemplate {
            code: "RB0-REHAB-INTENSIVE".to_string(),
            name: "Intensive Rehabilitation".to_string(),
            group: Some(RugGroup::Rb0),
            category: RugCategory::SpecialRehab,
            adl_sum_range: (11, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(
                    ServiceType::Physiotherapy,
                    CareRole::Physiotherapist,
                    3,
                    45,
                ),
                ServiceRequirementSpec::weekly(
                    ServiceType::OccupationalTherapy,
                    CareRole::OccupationalTherapist,
                    2,
                    45,
                ),
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 2, 30),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    7,
                    60,
                )
                .contracted(),
                ServiceRequirementSpec::per_plan(
                    ServiceType::RemoteMonitoring,
                    CareRole::CareCoordinator,
                    30,
                    ["Setup", "Discharge"],
                ),
                ServiceRequirementSpec::weekly(
                    ServiceType::SpeechTherapy,
                    CareRole::SpeechLanguagePathologist,
                    2,
                    30,
                )
                .when(Condition::FlagPresent(flags::HAS_SWALLOWING_FLAG.to_string())),
                ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 60)
                    .when(Condition::FlagPresent(flags::LIVES_ALONE_FLAG.to_string())),
            ],
        },
        CareBundleTemplate {
            code: "RA2-REHAB-SUPPORT".to_string(),
            name: "Rehabilitation with Home Support".to_string(),
            group: Some(RugGroup::Ra2),
            category: RugCategory::SpecialRehab,
            adl_sum_range: (4, 10),
            iadl_count_range: Some((2, 7)),
            required_flags: BTreeSet::new(),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(
                    ServiceType::Physiotherapy,
                    CareRole::Physiotherapist,
                    2,
                    45,
                ),
                ServiceRequirementSpec::weekly(
                    ServiceType::OccupationalTherapy,
                    CareRole::OccupationalTherapist,
                    1,
                    45,
                ),
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 1, 30),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    4,
                    45,
                )
                .contracted(),
                ServiceRequirementSpec::weekly(
                    ServiceType::SpeechTherapy,
                    CareRole::SpeechLanguagePathologist,
                    1,
                    30,
                )
                .when(Condition::FlagPresent(flags::HAS_SWALLOWING_FLAG.to_string())),
            ],
        },
        CareBundleTemplate {
            code: "RA1-REHAB".to_string(),
            name: "Rehabilitation".to_string(),
            group: Some(RugGroup::Ra1),
            category: RugCategory::SpecialRehab,
            adl_sum_range: (4, 10),
            iadl_count_range: Some((0, 1)),
            required_flags: BTreeSet::new(),
            plan_weeks: Some(8),
            services: vec![
                ServiceRequirementSpec::weekly(
                    ServiceType::Physiotherapy,
                    CareRole::Physiotherapist,
                    2,
                    45,
                ),
                ServiceRequirementSpec::weekly(
                    ServiceType::OccupationalTherapy,
                    CareRole::OccupationalTherapist,
                    1,
                    45,
                ),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    2,
                    45,
                )
                .contracted(),
                ServiceRequirementSpec::weekly(ServiceType::SocialWork, CareRole::SocialWorker, 1, 45)
                    .when(Condition::FlagPresent(flags::LIVES_ALONE_FLAG.to_string())),
            ],
        },
    ]
}
