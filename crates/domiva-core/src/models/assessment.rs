use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Raw clinical assessment scores, keyed by item code.
///
/// Values are integers: self-performance scores (0–6), presence flags
/// (0/1), or minute counts. A missing item reads as 0/absent rather than
/// an error. The map is write-once; reassessment produces a new
/// [`Assessment`] version instead of mutating an existing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawAssessment {
    items: BTreeMap<String, i64>,
}

impl RawAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<K, I>(items: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, i64)>,
    {
        Self {
            items: items.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// The recorded value for an item, if present.
    pub fn get(&self, code: &str) -> Option<i64> {
        self.items.get(code).copied()
    }

    /// The recorded value for an item, defaulting to 0 when absent.
    pub fn score(&self, code: &str) -> i64 {
        self.get(code).unwrap_or(0)
    }

    /// Whether a presence-flag item is set (any value ≥ 1).
    pub fn is_flagged(&self, code: &str) -> bool {
        self.score(code) >= 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// A versioned assessment event for one patient.
///
/// Owned by the assessment collaborator; stored here as shared vocabulary.
/// Records are immutable: a reassessment creates a new record with a
/// higher `version`, and the classification attached to the old version is
/// superseded rather than rewritten.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub occurred_on: jiff::civil::Date,
    pub version: u32,
    pub items: RawAssessment,
    pub created_at: jiff::Timestamp,
}
