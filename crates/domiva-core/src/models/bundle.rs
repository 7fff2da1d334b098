use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::classification::{RugCategory, RugGroup};

/// Service disciplines deliverable under a care bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ServiceType {
    Nursing,
    PersonalSupport,
    Physiotherapy,
    OccupationalTherapy,
    SpeechTherapy,
    Dietetics,
    SocialWork,
    RemoteMonitoring,
}

impl ServiceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Nursing => "NUR",
            Self::PersonalSupport => "PSW",
            Self::Physiotherapy => "PT",
            Self::OccupationalTherapy => "OT",
            Self::SpeechTherapy => "SLP",
            Self::Dietetics => "RD",
            Self::SocialWork => "SW",
            Self::RemoteMonitoring => "RPM",
        }
    }

    pub fn all() -> &'static [ServiceType] {
        &[
            Self::Nursing,
            Self::PersonalSupport,
            Self::Physiotherapy,
            Self::OccupationalTherapy,
            Self::SpeechTherapy,
            Self::Dietetics,
            Self::SocialWork,
            Self::RemoteMonitoring,
        ]
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ServiceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::all()
            .iter()
            .find(|t| t.code() == s)
            .copied()
            .ok_or_else(|| CoreError::UnknownServiceType(s.to_string()))
    }
}

/// The professional role required to deliver a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CareRole {
    RegisteredNurse,
    PersonalSupportWorker,
    Physiotherapist,
    OccupationalTherapist,
    SpeechLanguagePathologist,
    Dietitian,
    SocialWorker,
    CareCoordinator,
}

/// How a service is staffed: by the organization's own workforce or a
/// contracted agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssignmentType {
    Internal,
    Contracted,
}

/// A normalized-index measure a template condition can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Measure {
    AdlSum,
    IadlCount,
    Cps,
    Chess,
    PainScore,
}

/// A single inclusion condition on a conditional service spec.
///
/// Conditions on one spec combine with AND semantics; an empty condition
/// list means the spec is always required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    FlagPresent(String),
    IndexAtLeast { measure: Measure, min: i64 },
}

/// Cadence of a service within a template: a recurring weekly frequency,
/// or a fixed set of individually labeled visits per plan. Exactly one
/// form applies to any spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    PerWeek(u8),
    PerPlan { labels: Vec<String> },
}

/// One service line within a care-bundle template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceRequirementSpec {
    pub service_type: ServiceType,
    pub role: CareRole,
    pub assignment: AssignmentType,
    pub duration_minutes: u32,
    pub frequency: Frequency,
    pub conditions: Vec<Condition>,
}

impl ServiceRequirementSpec {
    /// A recurring weekly spec with no inclusion conditions.
    pub fn weekly(
        service_type: ServiceType,
        role: CareRole,
        times_per_week: u8,
        duration_minutes: u32,
    ) -> Self {
        Self {
            service_type,
            role,
            assignment: AssignmentType::Internal,
            duration_minutes,
            frequency: Frequency::PerWeek(times_per_week),
            conditions: Vec::new(),
        }
    }

    /// A fixed set of labeled visits per plan (e.g. "Setup", "Discharge").
    pub fn per_plan<L: Into<String>>(
        service_type: ServiceType,
        role: CareRole,
        duration_minutes: u32,
        labels: impl IntoIterator<Item = L>,
    ) -> Self {
        Self {
            service_type,
            role,
            assignment: AssignmentType::Internal,
            duration_minutes,
            frequency: Frequency::PerPlan {
                labels: labels.into_iter().map(Into::into).collect(),
            },
            conditions: Vec::new(),
        }
    }

    pub fn contracted(mut self) -> Self {
        self.assignment = AssignmentType::Contracted;
        self
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn is_required(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// A care-bundle template: the package of services offered to patients in
/// a given RUG group (or category, when `group` is None) whose ADL/IADL
/// indices fall in the template's ranges.
///
/// Static versioned reference data; read-only at composition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CareBundleTemplate {
    pub code: String,
    pub name: String,
    pub group: Option<RugGroup>,
    pub category: RugCategory,
    /// Closed range on `adl_sum`, both bounds inclusive.
    pub adl_sum_range: (u8, u8),
    /// Optional closed range on `iadl_count`.
    pub iadl_count_range: Option<(u8, u8)>,
    /// Patient flags that must all be present for this template to apply.
    pub required_flags: BTreeSet<String>,
    /// Plan duration override in weeks; the composer defaults to 12.
    pub plan_weeks: Option<u16>,
    pub services: Vec<ServiceRequirementSpec>,
}

/// Materialized cadence of a composed service requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Recurrence {
    Weekly { times_per_week: u8, plan_weeks: u16 },
    Single { label: String },
}

/// One concrete service requirement attached to a care plan.
///
/// The composer emits required entries before conditional ones, each set
/// in template-declared order; downstream scheduling consumes that order
/// as a priority contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceRequirement {
    pub service_type: ServiceType,
    pub role: CareRole,
    pub assignment: AssignmentType,
    pub duration_minutes: u32,
    pub recurrence: Recurrence,
    pub conditional: bool,
}
