pub mod assessment;
pub mod bundle;
pub mod classification;
pub mod flags;
pub mod visit;

pub use assessment::{Assessment, RawAssessment};
pub use bundle::{
    AssignmentType, CareBundleTemplate, CareRole, Condition, Frequency, Measure, Recurrence,
    ServiceRequirement, ServiceRequirementSpec, ServiceType,
};
pub use classification::{Classification, RugCategory, RugGroup};
pub use visit::{ScheduledVisit, SpacingRule};
