//! Assessment normalization: raw item scores to derived summary indices.
//!
//! `normalize` is pure and total: any raw map produces indices, with
//! missing items reading as 0/absent and out-of-range values clamped to
//! the nearest valid bound. Clamping is not an error; it is logged at
//! `warn` and reported through [`diagnostics`] so data-quality issues
//! stay observable without blocking classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use ts_rs::TS;

use domiva_core::models::RawAssessment;

use crate::items;

/// Scores for the six behaviour domains, each 0–3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BehaviourScores {
    pub wandering: u8,
    pub verbal_abuse: u8,
    pub physical_abuse: u8,
    pub socially_inappropriate: u8,
    pub inappropriate_public: u8,
    pub resists_care: u8,
}

impl BehaviourScores {
    fn domains(&self) -> [(&'static str, u8); 6] {
        [
            (items::BEHAVIOUR_WANDERING, self.wandering),
            (items::BEHAVIOUR_VERBAL_ABUSE, self.verbal_abuse),
            (items::BEHAVIOUR_PHYSICAL_ABUSE, self.physical_abuse),
            (
                items::BEHAVIOUR_SOCIALLY_INAPPROPRIATE,
                self.socially_inappropriate,
            ),
            (
                items::BEHAVIOUR_INAPPROPRIATE_PUBLIC,
                self.inappropriate_public,
            ),
            (items::BEHAVIOUR_RESISTS_CARE, self.resists_care),
        ]
    }

    /// A domain counts as present when it occurred on 1–2 of the last
    /// 3 days or more (score ≥ 2).
    pub fn any_present(&self) -> bool {
        self.domains().iter().any(|(_, score)| *score >= 2)
    }

    /// Item codes of the domains scoring ≥ 2.
    pub fn present_domains(&self) -> Vec<&'static str> {
        self.domains()
            .iter()
            .filter(|(_, score)| *score >= 2)
            .map(|(code, _)| *code)
            .collect()
    }
}

/// Extensive-service flags. Dialysis, chemotherapy, and oxygen therapy are
/// clinically-complex triggers and never appear here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExtensiveServiceFlags {
    pub iv_medication: bool,
    pub iv_feeding: bool,
    pub suctioning: bool,
    pub tracheostomy: bool,
    pub ventilator: bool,
}

impl ExtensiveServiceFlags {
    fn flags(&self) -> [(&'static str, bool); 5] {
        [
            (items::IV_MEDICATION, self.iv_medication),
            (items::IV_FEEDING, self.iv_feeding),
            (items::SUCTIONING, self.suctioning),
            (items::TRACHEOSTOMY_CARE, self.tracheostomy),
            (items::VENTILATOR, self.ventilator),
        ]
    }

    pub fn count(&self) -> u8 {
        self.flags().iter().filter(|(_, set)| *set).count() as u8
    }

    /// Item codes of the services present.
    pub fn present(&self) -> Vec<&'static str> {
        self.flags()
            .iter()
            .filter(|(_, set)| *set)
            .map(|(code, _)| *code)
            .collect()
    }
}

/// Derived summary indices for one assessment.
///
/// Recomputed on demand from the raw items; never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedIndices {
    /// Sum of the four converted ADL scores. Always within 4–18.
    pub adl_sum: u8,
    /// Number of IADL items scoring ≥ 3 (limited assistance or worse).
    pub iadl_count: u8,
    /// Cognitive performance score, 0–6.
    pub cps: u8,
    /// Health-instability score, 0–5.
    pub chess: u8,
    pub extensive: ExtensiveServiceFlags,
    /// Count of extensive-service flags present. Excludes dialysis.
    pub extensive_service_count: u8,
    /// PT + OT + SLP minutes over the last 7 days.
    pub therapy_minutes: u32,
    /// Pain scale 0–3; 3 means daily severe pain.
    pub pain_score: u8,
    pub fall_flag: bool,
    pub wandering_flag: bool,
    pub dialysis: bool,
    pub chemotherapy: bool,
    pub oxygen_therapy: bool,
    pub pressure_ulcer_stage: u8,
    pub swallowing: u8,
    pub weight_loss: bool,
    pub behaviour: BehaviourScores,
}

/// An out-of-range raw value observed during normalization.
///
/// Reported, not thrown; classification proceeds on the clamped value.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ItemDiagnostic {
    pub code: String,
    pub value: i64,
    pub min: i64,
    pub max: i64,
    pub message: String,
}

/// ADL self-performance conversion: raw 0→1, 1→2, 2→3, 3 and above→4.
/// Applied independently per item before summing, so the 4-item sum is
/// order-independent and always lands in 4–18.
fn convert_adl(raw: &RawAssessment, code: &str) -> u8 {
    match clamped(raw, code, 0, 4) {
        0 => 1,
        1 => 2,
        2 => 3,
        _ => 4,
    }
}

/// Read an item and clamp it to `[min, max]`. Defensive, not an error.
fn clamped(raw: &RawAssessment, code: &str, min: i64, max: i64) -> i64 {
    let value = raw.score(code);
    if value < min || value > max {
        warn!(item = code, value, min, max, "clamping out-of-range assessment item");
        value.clamp(min, max)
    } else {
        value
    }
}

/// Derive the cognitive performance score when no direct `cps` item is
/// supplied.
///
/// Severely impaired decision-making short-circuits to the top of the
/// scale (6 when eating is also dependent, else 5). Otherwise the score
/// steps up with the number of impairments across decision-making,
/// short-term memory, and communication, plus the number of those that
/// are severe.
fn derive_cps(raw: &RawAssessment) -> u8 {
    if raw.get(items::CPS).is_some() {
        return clamped(raw, items::CPS, 0, 6) as u8;
    }

    let decision = clamped(raw, items::COGNITIVE_SKILLS_DECISION_MAKING, 0, 4);
    let memory_problem = clamped(raw, items::SHORT_TERM_MEMORY_PROBLEM, 0, 1) == 1;
    let understood = clamped(raw, items::MAKING_SELF_UNDERSTOOD, 0, 4);

    if decision >= 4 {
        return if clamped(raw, items::ADL_EATING, 0, 6) >= 3 {
            6
        } else {
            5
        };
    }

    let impairments = [decision >= 1, memory_problem, understood >= 1]
        .iter()
        .filter(|present| **present)
        .count();

    match impairments {
        0 => 0,
        1 => 1,
        _ => {
            let severe = [decision >= 2, understood >= 2]
                .iter()
                .filter(|present| **present)
                .count() as u8;
            (2 + severe).min(4)
        }
    }
}

/// Convert raw per-item scores into the derived summary indices.
///
/// Pure and total: any raw map yields indices. Missing items read as
/// 0/absent; out-of-range values are clamped (see [`diagnostics`]).
pub fn normalize(raw: &RawAssessment) -> NormalizedIndices {
    let adl_sum: u8 = items::ADL_ITEMS
        .iter()
        .map(|code| convert_adl(raw, code))
        .sum();

    let iadl_count = items::IADL_ITEMS
        .iter()
        .filter(|code| clamped(raw, code, 0, 6) >= 3)
        .count() as u8;

    let extensive = ExtensiveServiceFlags {
        iv_medication: raw.is_flagged(items::IV_MEDICATION),
        iv_feeding: raw.is_flagged(items::IV_FEEDING),
        suctioning: raw.is_flagged(items::SUCTIONING),
        tracheostomy: raw.is_flagged(items::TRACHEOSTOMY_CARE),
        ventilator: raw.is_flagged(items::VENTILATOR),
    };

    let therapy_minutes = [items::PT_MINUTES, items::OT_MINUTES, items::SLP_MINUTES]
        .iter()
        .map(|code| clamped(raw, code, 0, 2520) as u32)
        .sum();

    let behaviour = BehaviourScores {
        wandering: clamped(raw, items::BEHAVIOUR_WANDERING, 0, 3) as u8,
        verbal_abuse: clamped(raw, items::BEHAVIOUR_VERBAL_ABUSE, 0, 3) as u8,
        physical_abuse: clamped(raw, items::BEHAVIOUR_PHYSICAL_ABUSE, 0, 3) as u8,
        socially_inappropriate: clamped(raw, items::BEHAVIOUR_SOCIALLY_INAPPROPRIATE, 0, 3) as u8,
        inappropriate_public: clamped(raw, items::BEHAVIOUR_INAPPROPRIATE_PUBLIC, 0, 3) as u8,
        resists_care: clamped(raw, items::BEHAVIOUR_RESISTS_CARE, 0, 3) as u8,
    };

    NormalizedIndices {
        adl_sum,
        iadl_count,
        cps: derive_cps(raw),
        chess: clamped(raw, items::CHESS, 0, 5) as u8,
        extensive_service_count: extensive.count(),
        extensive,
        therapy_minutes,
        pain_score: clamped(raw, items::PAIN_SCALE, 0, 3) as u8,
        fall_flag: raw.is_flagged(items::RECENT_FALLS),
        wandering_flag: behaviour.wandering >= 2,
        dialysis: raw.is_flagged(items::DIALYSIS),
        chemotherapy: raw.is_flagged(items::CHEMOTHERAPY),
        oxygen_therapy: raw.is_flagged(items::OXYGEN_THERAPY),
        pressure_ulcer_stage: clamped(raw, items::PRESSURE_ULCER_STAGE, 0, 4) as u8,
        swallowing: clamped(raw, items::SWALLOWING, 0, 3) as u8,
        weight_loss: raw.is_flagged(items::WEIGHT_LOSS),
        behaviour,
    }
}

/// Walk the recorded items against the registry and report every value
/// outside its valid range.
pub fn diagnostics(raw: &RawAssessment) -> Vec<ItemDiagnostic> {
    let mut findings = Vec::new();
    for def in items::known_items() {
        if let Some(value) = raw.get(def.code)
            && (value < def.min || value > def.max)
        {
            findings.push(ItemDiagnostic {
                code: def.code.to_string(),
                value,
                min: def.min,
                max: def.max,
                message: format!(
                    "{}: value {} is outside range [{}, {}]",
                    def.code, value, def.min, def.max,
                ),
            });
        }
    }
    findings
}
