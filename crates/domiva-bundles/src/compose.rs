//! Template selection and expansion.
//!
//! Selection is exact-group first, category fallback second, typed error
//! third; expansion gates conditional specs on the patient's context and
//! materializes cadences. Output ordering (required specs before
//! satisfied conditional specs, each in template-declared order) is a
//! priority contract consumed by downstream scheduling.

use std::collections::BTreeSet;

use tracing::debug;

use domiva_core::models::{
    CareBundleTemplate, Classification, Condition, Frequency, Measure, Recurrence,
    ServiceRequirement, ServiceRequirementSpec,
};
use domiva_rug::scoring::NormalizedIndices;

use crate::catalog::CatalogSnapshot;
use crate::error::ComposeError;

/// Plan duration assumed when a template does not override it.
pub const DEFAULT_PLAN_WEEKS: u16 = 12;

fn measure_value(idx: &NormalizedIndices, measure: Measure) -> i64 {
    match measure {
        Measure::AdlSum => i64::from(idx.adl_sum),
        Measure::IadlCount => i64::from(idx.iadl_count),
        Measure::Cps => i64::from(idx.cps),
        Measure::Chess => i64::from(idx.chess),
        Measure::PainScore => i64::from(idx.pain_score),
    }
}

/// Evaluate one condition against the patient context.
fn condition_holds(
    condition: &Condition,
    idx: &NormalizedIndices,
    patient_flags: &BTreeSet<String>,
) -> bool {
    match condition {
        Condition::FlagPresent(flag) => patient_flags.contains(flag),
        Condition::IndexAtLeast { measure, min } => measure_value(idx, *measure) >= *min,
    }
}

/// AND semantics across a spec's conditions; an empty list always holds.
fn conditions_hold(
    spec: &ServiceRequirementSpec,
    idx: &NormalizedIndices,
    patient_flags: &BTreeSet<String>,
) -> bool {
    spec.conditions
        .iter()
        .all(|c| condition_holds(c, idx, patient_flags))
}

fn in_closed_range(value: u8, range: (u8, u8)) -> bool {
    value >= range.0 && value <= range.1
}

fn template_applies(
    template: &CareBundleTemplate,
    idx: &NormalizedIndices,
    patient_flags: &BTreeSet<String>,
) -> bool {
    if !in_closed_range(idx.adl_sum, template.adl_sum_range) {
        return false;
    }
    if let Some(range) = template.iadl_count_range
        && !in_closed_range(idx.iadl_count, range)
    {
        return false;
    }
    template
        .required_flags
        .iter()
        .all(|flag| patient_flags.contains(flag))
}

/// Select the template for a classification: exact group match first,
/// then any template applying to the category broadly. First match in
/// catalog order wins, so flag-gated variants shadow their plain
/// siblings by ordering.
pub fn select_template<'a>(
    snapshot: &'a CatalogSnapshot,
    classification: &Classification,
    idx: &NormalizedIndices,
    patient_flags: &BTreeSet<String>,
) -> Result<&'a CareBundleTemplate, ComposeError> {
    let by_group = snapshot.templates.iter().find(|t| {
        t.group == Some(classification.group) && template_applies(t, idx, patient_flags)
    });

    let selected = by_group.or_else(|| {
        snapshot.templates.iter().find(|t| {
            t.group.is_none()
                && t.category == classification.category
                && template_applies(t, idx, patient_flags)
        })
    });

    selected.ok_or(ComposeError::NoMatchingTemplate {
        group: classification.group,
        category: classification.category,
    })
}

fn materialize(
    spec: &ServiceRequirementSpec,
    plan_weeks: u16,
    conditional: bool,
    out: &mut Vec<ServiceRequirement>,
) {
    match &spec.frequency {
        Frequency::PerWeek(times_per_week) => out.push(ServiceRequirement {
            service_type: spec.service_type,
            role: spec.role,
            assignment: spec.assignment,
            duration_minutes: spec.duration_minutes,
            recurrence: Recurrence::Weekly {
                times_per_week: *times_per_week,
                plan_weeks,
            },
            conditional,
        }),
        // Fixed visits are discrete and individually labeled; they are
        // never repeated weekly.
        Frequency::PerPlan { labels } => {
            for label in labels {
                out.push(ServiceRequirement {
                    service_type: spec.service_type,
                    role: spec.role,
                    assignment: spec.assignment,
                    duration_minutes: spec.duration_minutes,
                    recurrence: Recurrence::Single {
                        label: label.clone(),
                    },
                    conditional,
                });
            }
        }
    }
}

/// Compose the service requirements for a classified patient.
///
/// The snapshot is read-only for the duration of the call; callers obtain
/// it once from [`BundleCatalog::snapshot`](crate::catalog::BundleCatalog::snapshot)
/// so a reload cannot mix template versions mid-composition.
pub fn compose(
    classification: &Classification,
    idx: &NormalizedIndices,
    patient_flags: &BTreeSet<String>,
    snapshot: &CatalogSnapshot,
) -> Result<Vec<ServiceRequirement>, ComposeError> {
    let template = select_template(snapshot, classification, idx, patient_flags)?;
    debug!(
        template = %template.code,
        group = %classification.group,
        catalog_version = snapshot.version,
        "selected care-bundle template"
    );

    let plan_weeks = template.plan_weeks.unwrap_or(DEFAULT_PLAN_WEEKS);
    let mut requirements = Vec::new();

    for spec in template.services.iter().filter(|s| s.is_required()) {
        materialize(spec, plan_weeks, false, &mut requirements);
    }
    for spec in template.services.iter().filter(|s| !s.is_required()) {
        if conditions_hold(spec, idx, patient_flags) {
            materialize(spec, plan_weeks, true, &mut requirements);
        }
    }

    Ok(requirements)
}
