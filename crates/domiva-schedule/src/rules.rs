//! Per-service-type spacing configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use domiva_core::models::{ServiceType, SpacingRule};

use crate::error::ScheduleError;

/// Spacing rules keyed by service type.
///
/// Versioned reference data owned by configuration; every service type
/// that can appear on a schedule needs an entry, even if that entry
/// carries no minimum gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpacingRules {
    rules: BTreeMap<ServiceType, SpacingRule>,
}

impl SpacingRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, service: ServiceType, rule: SpacingRule) -> Self {
        self.rules.insert(service, rule);
        self
    }

    pub fn get(&self, service: ServiceType) -> Result<SpacingRule, ScheduleError> {
        self.rules
            .get(&service)
            .copied()
            .ok_or(ScheduleError::MissingSpacingRule(service))
    }

    /// Product defaults: gaps on the high-frequency disciplines, no
    /// constraint beyond non-overlap elsewhere.
    pub fn defaults() -> Self {
        Self::new()
            .with_rule(ServiceType::Nursing, SpacingRule::min_gap(240))
            .with_rule(ServiceType::PersonalSupport, SpacingRule::min_gap(120))
            .with_rule(ServiceType::Physiotherapy, SpacingRule::min_gap(1440))
            .with_rule(ServiceType::OccupationalTherapy, SpacingRule::min_gap(1440))
            .with_rule(ServiceType::SpeechTherapy, SpacingRule::min_gap(1440))
            .with_rule(ServiceType::Dietetics, SpacingRule::none())
            .with_rule(ServiceType::SocialWork, SpacingRule::none())
            .with_rule(ServiceType::RemoteMonitoring, SpacingRule::none())
    }
}
