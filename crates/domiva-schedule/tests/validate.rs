use domiva_core::models::{ScheduledVisit, ServiceType, SpacingRule};
use domiva_schedule::error::ScheduleError;
use domiva_schedule::rules::SpacingRules;
use domiva_schedule::validate::{Decision, Rejection, validate_schedule, validate_visit};
use uuid::Uuid;

fn patient() -> Uuid {
    Uuid::from_u128(1)
}

fn visit(patient_id: Uuid, service: ServiceType, start: &str, end: &str) -> ScheduledVisit {
    ScheduledVisit {
        patient_id,
        service_type: service,
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        visit_label: None,
    }
}

fn psw_rules(min_gap: i64) -> SpacingRules {
    SpacingRules::new()
        .with_rule(ServiceType::PersonalSupport, SpacingRule::min_gap(min_gap))
        .with_rule(ServiceType::Nursing, SpacingRule::none())
        .with_rule(ServiceType::SocialWork, SpacingRule::none())
}

#[test]
fn touching_visits_are_accepted() {
    let existing = vec![visit(
        patient(),
        ServiceType::SocialWork,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:00:00Z",
    )];
    let proposed = visit(
        patient(),
        ServiceType::SocialWork,
        "2026-03-02T09:00:00Z",
        "2026-03-02T10:00:00Z",
    );
    let decision = validate_visit(&proposed, &existing, &psw_rules(120)).unwrap();
    assert!(decision.is_accepted());
}

#[test]
fn overlapping_visits_are_rejected() {
    let existing = vec![visit(
        patient(),
        ServiceType::Nursing,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:30:00Z",
    )];
    let proposed = visit(
        patient(),
        ServiceType::SocialWork,
        "2026-03-02T09:00:00Z",
        "2026-03-02T10:00:00Z",
    );
    let decision = validate_visit(&proposed, &existing, &psw_rules(120)).unwrap();
    match decision {
        Decision::Rejected {
            rejection: Rejection::Overlap {
                conflicting_service, ..
            },
        } => assert_eq!(conflicting_service, ServiceType::Nursing),
        other => panic!("expected overlap rejection, got {other:?}"),
    }
}

#[test]
fn insufficient_spacing_carries_actual_and_required_gap() {
    let existing = vec![visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:00:00Z",
    )];
    let proposed = visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T10:30:00Z",
        "2026-03-02T11:30:00Z",
    );
    let decision = validate_visit(&proposed, &existing, &psw_rules(120)).unwrap();
    match decision {
        Decision::Rejected {
            rejection:
                Rejection::InsufficientSpacing {
                    service,
                    actual_gap_minutes,
                    required_gap_minutes,
                },
        } => {
            assert_eq!(service, ServiceType::PersonalSupport);
            assert_eq!(actual_gap_minutes, 90);
            assert_eq!(required_gap_minutes, 120);
        }
        other => panic!("expected spacing rejection, got {other:?}"),
    }
}

#[test]
fn exact_minimum_gap_is_accepted() {
    let existing = vec![visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:00:00Z",
    )];
    let proposed = visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T11:00:00Z",
        "2026-03-02T12:00:00Z",
    );
    let decision = validate_visit(&proposed, &existing, &psw_rules(120)).unwrap();
    assert!(decision.is_accepted());
}

#[test]
fn spacing_applies_only_within_one_service_type() {
    let existing = vec![visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:00:00Z",
    )];
    // Thirty minutes after a PSW visit, but nursing has no gap to honour
    // against it; only non-concurrency applies across types.
    let proposed = visit(
        patient(),
        ServiceType::Nursing,
        "2026-03-02T09:30:00Z",
        "2026-03-02T10:00:00Z",
    );
    let decision = validate_visit(&proposed, &existing, &psw_rules(120)).unwrap();
    assert!(decision.is_accepted());
}

#[test]
fn other_patients_do_not_interfere() {
    let existing = vec![visit(
        Uuid::from_u128(2),
        ServiceType::PersonalSupport,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:00:00Z",
    )];
    let proposed = visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T08:30:00Z",
        "2026-03-02T09:30:00Z",
    );
    let decision = validate_visit(&proposed, &existing, &psw_rules(120)).unwrap();
    assert!(decision.is_accepted());
}

#[test]
fn labeled_fixed_visits_skip_spacing_but_not_overlap() {
    let existing = vec![visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:00:00Z",
    )];

    let mut setup = visit(
        patient(),
        ServiceType::PersonalSupport,
        "2026-03-02T09:30:00Z",
        "2026-03-02T10:00:00Z",
    );
    setup.visit_label = Some("Setup".to_string());
    let decision = validate_visit(&setup, &existing, &psw_rules(120)).unwrap();
    assert!(decision.is_accepted());

    let mut overlapping = setup.clone();
    overlapping.start = "2026-03-02T08:30:00Z".parse().unwrap();
    overlapping.end = "2026-03-02T09:15:00Z".parse().unwrap();
    let decision = validate_visit(&overlapping, &existing, &psw_rules(120)).unwrap();
    assert!(!decision.is_accepted());
}

#[test]
fn missing_spacing_rule_is_a_configuration_error() {
    let proposed = visit(
        patient(),
        ServiceType::Physiotherapy,
        "2026-03-02T08:00:00Z",
        "2026-03-02T09:00:00Z",
    );
    let err = validate_visit(&proposed, &[], &psw_rules(120)).unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::MissingSpacingRule(ServiceType::Physiotherapy)
    ));
}

#[test]
fn default_rules_cover_every_service_type() {
    let rules = SpacingRules::defaults();
    for service in ServiceType::all() {
        assert!(rules.get(*service).is_ok(), "no rule for {service}");
    }
}

#[test]
fn batch_validation_finds_pairwise_conflicts() {
    let rules = psw_rules(120);
    let clean = vec![
        visit(
            patient(),
            ServiceType::PersonalSupport,
            "2026-03-02T08:00:00Z",
            "2026-03-02T09:00:00Z",
        ),
        visit(
            patient(),
            ServiceType::PersonalSupport,
            "2026-03-02T11:00:00Z",
            "2026-03-02T12:00:00Z",
        ),
        visit(
            patient(),
            ServiceType::Nursing,
            "2026-03-02T09:15:00Z",
            "2026-03-02T09:45:00Z",
        ),
    ];
    assert!(validate_schedule(&clean, &rules).unwrap().is_accepted());

    let conflicted = vec![
        visit(
            patient(),
            ServiceType::PersonalSupport,
            "2026-03-02T08:00:00Z",
            "2026-03-02T09:00:00Z",
        ),
        visit(
            patient(),
            ServiceType::PersonalSupport,
            "2026-03-02T10:00:00Z",
            "2026-03-02T11:00:00Z",
        ),
    ];
    assert!(!validate_schedule(&conflicted, &rules).unwrap().is_accepted());
}
