use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The seven RUG-III/HC categories, in descending clinical priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RugCategory {
    SpecialRehab,
    ExtensiveServices,
    SpecialCare,
    ClinicallyComplex,
    ImpairedCognition,
    BehaviourProblems,
    ReducedPhysicalFunction,
}

impl RugCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SpecialRehab => "Special Rehabilitation",
            Self::ExtensiveServices => "Extensive Services",
            Self::SpecialCare => "Special Care",
            Self::ClinicallyComplex => "Clinically Complex",
            Self::ImpairedCognition => "Impaired Cognition",
            Self::BehaviourProblems => "Behaviour Problems",
            Self::ReducedPhysicalFunction => "Reduced Physical Function",
        }
    }
}

/// The 23 RUG-III/HC severity groups.
///
/// Groups are mutually exclusive within a category and exhaustive over
/// ADL 4–18; the classifier assigns exactly one per assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RugGroup {
    #[serde(rename = "RB0")]
    Rb0,
    #[serde(rename = "RA2")]
    Ra2,
    #[serde(rename = "RA1")]
    Ra1,
    #[serde(rename = "SE3")]
    Se3,
    #[serde(rename = "SE2")]
    Se2,
    #[serde(rename = "SE1")]
    Se1,
    #[serde(rename = "SSB")]
    Ssb,
    #[serde(rename = "SSA")]
    Ssa,
    #[serde(rename = "CB2")]
    Cb2,
    #[serde(rename = "CB1")]
    Cb1,
    #[serde(rename = "CA2")]
    Ca2,
    #[serde(rename = "CA1")]
    Ca1,
    #[serde(rename = "IB1")]
    Ib1,
    #[serde(rename = "IA2")]
    Ia2,
    #[serde(rename = "IA1")]
    Ia1,
    #[serde(rename = "BB1")]
    Bb1,
    #[serde(rename = "BA2")]
    Ba2,
    #[serde(rename = "BA1")]
    Ba1,
    #[serde(rename = "PD1")]
    Pd1,
    #[serde(rename = "PC1")]
    Pc1,
    #[serde(rename = "PB1")]
    Pb1,
    #[serde(rename = "PA2")]
    Pa2,
    #[serde(rename = "PA1")]
    Pa1,
}

impl RugGroup {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rb0 => "RB0",
            Self::Ra2 => "RA2",
            Self::Ra1 => "RA1",
            Self::Se3 => "SE3",
            Self::Se2 => "SE2",
            Self::Se1 => "SE1",
            Self::Ssb => "SSB",
            Self::Ssa => "SSA",
            Self::Cb2 => "CB2",
            Self::Cb1 => "CB1",
            Self::Ca2 => "CA2",
            Self::Ca1 => "CA1",
            Self::Ib1 => "IB1",
            Self::Ia2 => "IA2",
            Self::Ia1 => "IA1",
            Self::Bb1 => "BB1",
            Self::Ba2 => "BA2",
            Self::Ba1 => "BA1",
            Self::Pd1 => "PD1",
            Self::Pc1 => "PC1",
            Self::Pb1 => "PB1",
            Self::Pa2 => "PA2",
            Self::Pa1 => "PA1",
        }
    }

    pub fn category(&self) -> RugCategory {
        match self {
            Self::Rb0 | Self::Ra2 | Self::Ra1 => RugCategory::SpecialRehab,
            Self::Se3 | Self::Se2 | Self::Se1 => RugCategory::ExtensiveServices,
            Self::Ssb | Self::Ssa => RugCategory::SpecialCare,
            Self::Cb2 | Self::Cb1 | Self::Ca2 | Self::Ca1 => RugCategory::ClinicallyComplex,
            Self::Ib1 | Self::Ia2 | Self::Ia1 => RugCategory::ImpairedCognition,
            Self::Bb1 | Self::Ba2 | Self::Ba1 => RugCategory::BehaviourProblems,
            Self::Pd1 | Self::Pc1 | Self::Pb1 | Self::Pa2 | Self::Pa1 => {
                RugCategory::ReducedPhysicalFunction
            }
        }
    }

    /// Acuity rank used for downstream queue prioritization.
    ///
    /// Strictly descending in cascade order: 23 (RB0) down to 1 (PA1).
    pub fn numeric_rank(&self) -> u8 {
        match self {
            Self::Rb0 => 23,
            Self::Ra2 => 22,
            Self::Ra1 => 21,
            Self::Se3 => 20,
            Self::Se2 => 19,
            Self::Se1 => 18,
            Self::Ssb => 17,
            Self::Ssa => 16,
            Self::Cb2 => 15,
            Self::Cb1 => 14,
            Self::Ca2 => 13,
            Self::Ca1 => 12,
            Self::Ib1 => 11,
            Self::Ia2 => 10,
            Self::Ia1 => 9,
            Self::Bb1 => 8,
            Self::Ba2 => 7,
            Self::Ba1 => 6,
            Self::Pd1 => 5,
            Self::Pc1 => 4,
            Self::Pb1 => 3,
            Self::Pa2 => 2,
            Self::Pa1 => 1,
        }
    }

    pub fn all() -> &'static [RugGroup] {
        &[
            Self::Rb0,
            Self::Ra2,
            Self::Ra1,
            Self::Se3,
            Self::Se2,
            Self::Se1,
            Self::Ssb,
            Self::Ssa,
            Self::Cb2,
            Self::Cb1,
            Self::Ca2,
            Self::Ca1,
            Self::Ib1,
            Self::Ia2,
            Self::Ia1,
            Self::Bb1,
            Self::Ba2,
            Self::Ba1,
            Self::Pd1,
            Self::Pc1,
            Self::Pb1,
            Self::Pa2,
            Self::Pa1,
        ]
    }
}

impl fmt::Display for RugGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RugGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RugGroup::all()
            .iter()
            .find(|g| g.code() == s)
            .copied()
            .ok_or_else(|| CoreError::UnknownGroup(s.to_string()))
    }
}

/// The outcome of classifying one assessment.
///
/// Immutable once created; a reassessment produces a new classification
/// that supersedes this one. `trigger_flags` records which clinical
/// predicates fired (e.g. `dialysis`, `cps_3plus`) for display and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub group: RugGroup,
    pub category: RugCategory,
    pub numeric_rank: u8,
    pub trigger_flags: BTreeSet<String>,
}
