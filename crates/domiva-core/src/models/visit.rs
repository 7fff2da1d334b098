use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::bundle::ServiceType;

/// A scheduled (or proposed) home-care visit.
///
/// The interval is half-open: `[start, end)`. Lifecycle is owned by the
/// scheduling collaborator; the validator only reads sets of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScheduledVisit {
    pub patient_id: Uuid,
    pub service_type: ServiceType,
    pub start: jiff::Timestamp,
    pub end: jiff::Timestamp,
    /// Set on discrete plan visits ("Setup", "Discharge"); None for
    /// recurring visits.
    pub visit_label: Option<String>,
}

impl ScheduledVisit {
    /// Half-open interval intersection. Touching endpoints
    /// (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &ScheduledVisit) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        self.start.duration_until(self.end).as_mins()
    }
}

/// Minimum spacing between consecutive visits of one service type for one
/// patient. `None` means no spacing constraint beyond non-overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpacingRule {
    pub min_gap_minutes: Option<i64>,
}

impl SpacingRule {
    pub fn none() -> Self {
        Self {
            min_gap_minutes: None,
        }
    }

    pub fn min_gap(minutes: i64) -> Self {
        Self {
            min_gap_minutes: Some(minutes),
        }
    }
}
