use domiva_core::models::{RugCategory, RugGroup};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    /// No template in the active catalog matched the classification. A
    /// configuration bug to surface to an operator, never defaulted away.
    #[error("no active care-bundle template matches group {group} ({})", .category.name())]
    NoMatchingTemplate {
        group: RugGroup,
        category: RugCategory,
    },
}
