//! Built-in care-bundle templates, one module per RUG category.
//!
//! Catalog order matters: group-specific templates precede category
//! fallbacks, and flag-gated variants precede their plain siblings.

pub mod behaviour;
pub mod clinically_complex;
pub mod extensive_services;
pub mod impaired_cognition;
pub mod physical_function;
pub mod special_care;
pub mod special_rehab;

use domiva_core::models::CareBundleTemplate;

/// Every built-in template, in selection order.
pub fn all() -> Vec<CareBundleTemplate> {
    let mut templates = Vec::new();
    templates.extend(special_rehab::templates());
    templates.extend(extensive_services::templates());
    templates.extend(special_care::templates());
    templates.extend(clinically_complex::templates());
    templates.extend(impaired_cognition::templates());
    templates.extend(behaviour::templates());
    templates.extend(physical_function::templates());
    templates
}
