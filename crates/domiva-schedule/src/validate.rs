//! Visit validation: patient non-concurrency and same-service spacing.
//!
//! Acceptance is advisory: the validator works on the snapshot the
//! caller supplies and performs no reads or writes of its own. Two
//! concurrent scheduling requests can both observe "no conflict", so the
//! caller must make check-then-insert atomic: serialize insertion per
//! patient, or back the overlap predicate with a database exclusion
//! constraint. A plain advisory check alone is not enough.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use ts_rs::TS;

use domiva_core::models::{ScheduledVisit, ServiceType};

use crate::error::ScheduleError;
use crate::rules::SpacingRules;

/// Why a proposed visit was turned down. An expected, user-facing
/// outcome for the scheduler to present, not a system error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "snake_case", tag = "reason")]
#[ts(export)]
pub enum Rejection {
    #[error("visit overlaps an existing {conflicting_service} visit starting {conflicting_start}")]
    Overlap {
        conflicting_service: ServiceType,
        conflicting_start: jiff::Timestamp,
        conflicting_end: jiff::Timestamp,
    },

    #[error(
        "{service} visits must be {required_gap_minutes} minutes apart; nearest is {actual_gap_minutes} minutes"
    )]
    InsufficientSpacing {
        service: ServiceType,
        actual_gap_minutes: i64,
        required_gap_minutes: i64,
    },
}

/// Outcome of validating a proposed visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "decision")]
#[ts(export)]
pub enum Decision {
    Accepted,
    Rejected { rejection: Rejection },
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted)
    }

    fn rejected(rejection: Rejection) -> Self {
        Decision::Rejected { rejection }
    }
}

/// Edge-to-edge gap in minutes between two non-overlapping visits.
fn gap_minutes(a: &ScheduledVisit, b: &ScheduledVisit) -> i64 {
    if a.end <= b.start {
        a.end.duration_until(b.start).as_mins()
    } else if b.end <= a.start {
        b.end.duration_until(a.start).as_mins()
    } else {
        0
    }
}

/// Validate one proposed visit against a patient's existing schedule.
///
/// Constraint 1 (non-concurrency): the proposed `[start, end)` interval
/// must not intersect any existing visit for the same patient, whatever
/// the service type; touching endpoints are fine.
///
/// Constraint 2 (same-service spacing): when the proposed visit's
/// service type carries a minimum gap, the edge-to-edge distance to the
/// nearest existing visit of that same service type must reach it.
/// Other service types are exempt, as are labeled fixed visits
/// (Setup/Discharge style), which occur once per plan.
pub fn validate_visit(
    proposed: &ScheduledVisit,
    existing: &[ScheduledVisit],
    rules: &SpacingRules,
) -> Result<Decision, ScheduleError> {
    let same_patient: Vec<&ScheduledVisit> = existing
        .iter()
        .filter(|v| v.patient_id == proposed.patient_id)
        .collect();

    if let Some(conflict) = same_patient.iter().find(|v| v.overlaps(proposed)) {
        debug!(
            patient = %proposed.patient_id,
            service = %proposed.service_type,
            "rejecting visit: overlap"
        );
        return Ok(Decision::rejected(Rejection::Overlap {
            conflicting_service: conflict.service_type,
            conflicting_start: conflict.start,
            conflicting_end: conflict.end,
        }));
    }

    if proposed.visit_label.is_none() {
        let rule = rules.get(proposed.service_type)?;
        if let Some(required) = rule.min_gap_minutes {
            let nearest = same_patient
                .iter()
                .filter(|v| v.service_type == proposed.service_type)
                .map(|v| gap_minutes(proposed, v))
                .min();
            if let Some(actual) = nearest
                && actual < required
            {
                debug!(
                    patient = %proposed.patient_id,
                    service = %proposed.service_type,
                    actual,
                    required,
                    "rejecting visit: insufficient spacing"
                );
                return Ok(Decision::rejected(Rejection::InsufficientSpacing {
                    service: proposed.service_type,
                    actual_gap_minutes: actual,
                    required_gap_minutes: required,
                }));
            }
        }
    }

    Ok(Decision::Accepted)
}

/// Validate a whole proposed schedule pairwise, returning the first
/// rejection found. Useful when materializing a fresh plan before any
/// visit is persisted.
pub fn validate_schedule(
    visits: &[ScheduledVisit],
    rules: &SpacingRules,
) -> Result<Decision, ScheduleError> {
    for (i, visit) in visits.iter().enumerate() {
        let decision = validate_visit(visit, &visits[..i], rules)?;
        if !decision.is_accepted() {
            return Ok(decision);
        }
    }
    Ok(Decision::Accepted)
}
