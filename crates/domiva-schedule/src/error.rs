use domiva_core::models::ServiceType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The rules map has no entry at all for a service type it was asked
    /// about. Distinct from an entry with no minimum gap, which means
    /// "no spacing constraint" deliberately.
    #[error("no spacing rule configured for service type {0}")]
    MissingSpacingRule(ServiceType),
}
