use std::collections::BTreeSet;

use domiva_core::models::{
    CareBundleTemplate, CareRole, Condition, RugCategory, RugGroup, ServiceRequirementSpec,
    ServiceType, flags,
};

/// Special Care bundles. The wound-intensive SSB variant is listed first
/// so it shadows the plain SSB template when the wound flag is present.
pub fn templates() -> Vec<CareBundleTemplate> {
    vec![
        CareBundleTemplate {
            code: "SSB-WOUND".to_string(),
            name: "Special Care (Wound Intensive)".to_string(),
            group: Some(RugGroup::Ssb),
            category: RugCategory::SpecialCare,
            adl_sum_range: (14, 18),
            iadl_count_range: None,
            required_flags: BTreeSet::from([flags::HAS_WOUND_FLAG.to_string()]),
            plan_weeks: None,
            services: vec![
                ServiceRequirementSpec::weekly(ServiceType::Nursing, CareRole::RegisteredNurse, 7, 45),
                ServiceRequirementSpec::weekly(
                    ServiceType::PersonalSupport,
                    CareRole::PersonalSupportWorker,
                    7,
                    45,
                )
                .contracted(),
                ServiceRequirementSpec::weekly(
                    ServiceType::OccupationalTherapy,
                    CareRole::OccupationalTherapist,
                    1,
                    45,
                ),
                ServiceRequirementSpec::weekly(ServiceType::Dietetics, CareRole::Dietitian, 1, 30)
                    .when(Condition::FlagPresent(
                        flags::HAS_NUTRITION_RISK_FLAG.to_string(),
                    )),
            ],
        },
        CareBundleTemplate {
            code: "SSB-HIGH".to_string(),
            name: "Special Care (High ADL)".to_string(),
            group: Some(RugGroup::Ssb),
            category: RugCategory::SpecialCare,
            adl_sum_range: (14, 18),
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
                ServiceRequirementSpec::weekly(
                    ServiceType::OccupationalTherapy,
                    CareRole::OccupationalTherapist,
                    1,
                    45,
                ),
            ],
        },
        CareBundleTemplate {
            code: "SSA-STANDARD".to_string(),
            name: "Special Care".to_string(),
            group: Some(RugGroup::Ssa),
            category: RugCategory::SpecialCare,
            adl_sum_range: (4, 13),
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
                ServiceRequirementSpec::weekly(
                    ServiceType::SpeechTherapy,
                    CareRole::SpeechLanguagePathologist,
                    1,
                    30,
                )
                .when(Condition::FlagPresent(flags::HAS_SWALLOWING_FLAG.to_string())),
                ServiceRequirementSpec::weekly(ServiceType::Dietetics, CareRole::Dietitian, 1, 30)
                    .when(Condition::FlagPresent(
                        flags::HAS_NUTRITION_RISK_FLAG.to_string(),
                    )),
            ],
        },
    ]
}
