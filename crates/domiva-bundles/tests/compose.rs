use std::collections::BTreeSet;

use domiva_bundles::catalog::{BundleCatalog, CatalogSnapshot};
use domiva_bundles::compose::compose;
use domiva_bundles::error::ComposeError;
use domiva_core::models::{Recurrence, RugGroup, ServiceType, flags};
use domiva_rug::classify;
use domiva_rug::scoring::{BehaviourScores, ExtensiveServiceFlags, NormalizedIndices};

fn base_idx(adl_sum: u8, iadl_count: u8) -> NormalizedIndices {
    NormalizedIndices {
        adl_sum,
        iadl_count,
        cps: 0,
        chess: 0,
        extensive: ExtensiveServiceFlags::default(),
        extensive_service_count: 0,
        therapy_minutes: 0,
        pain_score: 0,
        fall_flag: false,
        wandering_flag: false,
        dialysis: false,
        chemotherapy: false,
        oxygen_therapy: false,
        pressure_ulcer_stage: 0,
        swallowing: 0,
        weight_loss: false,
        behaviour: BehaviourScores::default(),
    }
}

fn flag_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|f| f.to_string()).collect()
}

#[test]
fn conditional_service_is_gated_on_patient_flag() {
    let mut idx = base_idx(12, 0);
    idx.therapy_minutes = 360;
    let classification = classify(&idx);
    assert_eq!(classification.group, RugGroup::Rb0);

    let snapshot = BundleCatalog::builtin().snapshot();

    let without = compose(&classification, &idx, &flag_set(&[]), &snapshot).unwrap();
    assert!(
        !without
            .iter()
            .any(|r| r.service_type == ServiceType::SpeechTherapy)
    );

    let with_flag = compose(
        &classification,
        &idx,
        &flag_set(&[flags::HAS_SWALLOWING_FLAG]),
        &snapshot,
    )
    .unwrap();
    let slp: Vec<_> = with_flag
        .iter()
        .filter(|r| r.service_type == ServiceType::SpeechTherapy)
        .collect();
    assert_eq!(slp.len(), 1);
    assert!(slp[0].conditional);
}

#[test]
fn required_entries_precede_conditional_entries() {
    let mut idx = base_idx(12, 0);
    idx.therapy_minutes = 360;
    let classification = classify(&idx);
    let snapshot = BundleCatalog::builtin().snapshot();

    let requirements = compose(
        &classification,
        &idx,
        &flag_set(&[flags::HAS_SWALLOWING_FLAG, flags::LIVES_ALONE_FLAG]),
        &snapshot,
    )
    .unwrap();

    let first_conditional = requirements
        .iter()
        .position(|r| r.conditional)
        .expect("conditional entries expected");
    assert!(requirements[..first_conditional].iter().all(|r| !r.conditional));
    assert!(requirements[first_conditional..].iter().all(|r| r.conditional));
}

#[test]
fn fixed_visits_materialize_as_labeled_singles() {
    let mut idx = base_idx(12, 0);
    idx.therapy_minutes = 360;
    let classification = classify(&idx);
    let snapshot = BundleCatalog::builtin().snapshot();

    let requirements = compose(&classification, &idx, &flag_set(&[]), &snapshot).unwrap();
    let rpm: Vec<_> = requirements
        .iter()
        .filter(|r| r.service_type == ServiceType::RemoteMonitoring)
        .collect();
    assert_eq!(rpm.len(), 2);

    let labels: Vec<&str> = rpm
        .iter()
        .map(|r| match &r.recurrence {
            Recurrence::Single { label } => label.as_str(),
            Recurrence::Weekly { .. } => panic!("fixed visits must not recur weekly"),
        })
        .collect();
    assert_eq!(labels, vec!["Setup", "Discharge"]);
}

#[test]
fn plan_weeks_default_and_template_override() {
    let snapshot = BundleCatalog::builtin().snapshot();

    let mut top = base_idx(12, 0);
    top.therapy_minutes = 360;
    let top_reqs = compose(&classify(&top), &top, &flag_set(&[]), &snapshot).unwrap();
    assert!(top_reqs.iter().any(|r| matches!(
        r.recurrence,
        Recurrence::Weekly { plan_weeks: 12, .. }
    )));

    let mut low = base_idx(8, 1);
    low.therapy_minutes = 150;
    let classification = classify(&low);
    assert_eq!(classification.group, RugGroup::Ra1);
    let low_reqs = compose(&classification, &low, &flag_set(&[]), &snapshot).unwrap();
    assert!(low_reqs.iter().all(|r| matches!(
        r.recurrence,
        Recurrence::Weekly { plan_weeks: 8, .. }
    )));
}

#[test]
fn category_fallback_applies_when_no_group_template_exists() {
    let mut idx = base_idx(8, 0);
    idx.cps = 4;
    let classification = classify(&idx);
    let snapshot = BundleCatalog::builtin().snapshot();

    let requirements = compose(&classification, &idx, &flag_set(&[]), &snapshot).unwrap();
    assert!(
        requirements
            .iter()
            .any(|r| r.service_type == ServiceType::PersonalSupport)
    );
    assert!(
        requirements
            .iter()
            .any(|r| r.service_type == ServiceType::Nursing)
    );
}

#[test]
fn flag_gated_template_shadows_plain_sibling() {
    let mut idx = base_idx(15, 0);
    idx.pressure_ulcer_stage = 3;
    let classification = classify(&idx);
    assert_eq!(classification.group, RugGroup::Ssb);
    let snapshot = BundleCatalog::builtin().snapshot();

    let nursing_times = |flags: &BTreeSet<String>| {
        let reqs = compose(&classification, &idx, flags, &snapshot).unwrap();
        reqs.iter()
            .find(|r| r.service_type == ServiceType::Nursing)
            .map(|r| match r.recurrence {
                Recurrence::Weekly { times_per_week, .. } => times_per_week,
                Recurrence::Single { .. } => 0,
            })
            .unwrap()
    };

    assert_eq!(nursing_times(&flag_set(&[flags::HAS_WOUND_FLAG])), 7);
    assert_eq!(nursing_times(&flag_set(&[])), 5);
}

#[test]
fn numeric_threshold_condition_reads_indices() {
    let mut idx = base_idx(10, 0);
    idx.extensive = ExtensiveServiceFlags {
        iv_medication: true,
        iv_feeding: true,
        suctioning: true,
        tracheostomy: true,
        ventilator: false,
    };
    idx.extensive_service_count = idx.extensive.count();
    idx.chess = 3;
    let classification = classify(&idx);
    assert_eq!(classification.group, RugGroup::Se3);
    let snapshot = BundleCatalog::builtin().snapshot();

    let with_chess = compose(&classification, &idx, &flag_set(&[]), &snapshot).unwrap();
    assert!(
        with_chess
            .iter()
            .any(|r| r.service_type == ServiceType::Dietetics)
    );

    idx.chess = 2;
    let without = compose(&classify(&idx), &idx, &flag_set(&[]), &snapshot).unwrap();
    assert!(
        !without
            .iter()
            .any(|r| r.service_type == ServiceType::Dietetics)
    );
}

#[test]
fn missing_template_is_a_typed_error() {
    let mut idx = base_idx(12, 0);
    idx.therapy_minutes = 360;
    let classification = classify(&idx);

    let empty = CatalogSnapshot {
        version: 9,
        templates: Vec::new(),
    };
    let err = compose(&classification, &idx, &flag_set(&[]), &empty).unwrap_err();
    assert!(matches!(err, ComposeError::NoMatchingTemplate { .. }));
    assert!(err.to_string().contains("RB0"));
}

#[test]
fn reload_bumps_version_without_touching_held_snapshots() {
    let catalog = BundleCatalog::builtin();
    let before = catalog.snapshot();
    assert_eq!(before.version, 1);
    assert!(!before.templates.is_empty());

    let new_version = catalog.reload(Vec::new());
    assert_eq!(new_version, 2);

    // The held snapshot is unaffected; new reads see the new version.
    assert_eq!(before.version, 1);
    assert!(!before.templates.is_empty());
    let after = catalog.snapshot();
    assert_eq!(after.version, 2);
    assert!(after.templates.is_empty());
}
