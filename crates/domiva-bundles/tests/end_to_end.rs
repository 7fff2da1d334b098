//! Full pipeline: raw assessment → normalize → classify → compose.

use std::collections::BTreeSet;

use domiva_bundles::catalog::BundleCatalog;
use domiva_bundles::compose::compose;
use domiva_core::models::{RawAssessment, RugCategory, RugGroup, ServiceType, flags};
use domiva_rug::scoring::normalize;
use domiva_rug::{classify, items};

fn assessment() -> RawAssessment {
    RawAssessment::from_items([
        (items::ADL_BED_MOBILITY, 2_i64),
        (items::ADL_TRANSFER, 2),
        (items::ADL_TOILET_USE, 2),
        (items::ADL_EATING, 2),
        (items::PT_MINUTES, 200),
        (items::OT_MINUTES, 160),
        (items::CHESS, 1),
        (items::COGNITIVE_SKILLS_DECISION_MAKING, 1),
    ])
}

#[test]
fn rehab_patient_flows_to_intensive_bundle() {
    let idx = normalize(&assessment());
    assert_eq!(idx.adl_sum, 12);
    assert_eq!(idx.therapy_minutes, 360);
    assert_eq!(idx.chess, 1);
    assert_eq!(idx.cps, 1);

    let classification = classify(&idx);
    assert_eq!(classification.group, RugGroup::Rb0);
    assert_eq!(classification.category, RugCategory::SpecialRehab);
    assert_eq!(classification.numeric_rank, 23);

    let snapshot = BundleCatalog::builtin().snapshot();
    let requirements = compose(&classification, &idx, &BTreeSet::new(), &snapshot).unwrap();

    let services: BTreeSet<ServiceType> =
        requirements.iter().map(|r| r.service_type).collect();
    for expected in [
        ServiceType::Physiotherapy,
        ServiceType::OccupationalTherapy,
        ServiceType::Nursing,
        ServiceType::PersonalSupport,
        ServiceType::RemoteMonitoring,
    ] {
        assert!(services.contains(&expected), "missing {expected}");
    }
    assert!(!services.contains(&ServiceType::SpeechTherapy));
}

#[test]
fn swallowing_flag_adds_speech_therapy_downstream() {
    let idx = normalize(&assessment());
    let classification = classify(&idx);
    let snapshot = BundleCatalog::builtin().snapshot();

    let patient_flags = BTreeSet::from([flags::HAS_SWALLOWING_FLAG.to_string()]);
    let requirements = compose(&classification, &idx, &patient_flags, &snapshot).unwrap();
    assert!(
        requirements
            .iter()
            .any(|r| r.service_type == ServiceType::SpeechTherapy && r.conditional)
    );
}
