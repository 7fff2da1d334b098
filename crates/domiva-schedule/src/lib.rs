//! domiva-schedule
//!
//! Visit schedule validation: patient non-concurrency and per-service
//! spacing rules. The validator reads caller-supplied snapshots and never
//! mutates; persisting an accepted visit is the caller's job and must be
//! atomic with the check (see the note on [`validate`]).

pub mod error;
pub mod rules;
pub mod validate;

pub use error::ScheduleError;
pub use rules::SpacingRules;
pub use validate::{Decision, Rejection, validate_schedule, validate_visit};
