//! The in-memory template catalog.
//!
//! Reads take a cheap [`CatalogSnapshot`] Arc so a whole compose observes
//! one template version even if the catalog is reloaded mid-flight;
//! reloads swap the pointer and bump the version.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use domiva_core::models::CareBundleTemplate;

use crate::templates;

/// One immutable, versioned view of the template catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogSnapshot {
    pub version: u32,
    pub templates: Vec<CareBundleTemplate>,
}

/// Holder for the current catalog version.
///
/// The template-configuration collaborator supplies replacement template
/// sets via [`reload`](BundleCatalog::reload); the core never mutates
/// templates in place.
#[derive(Debug)]
pub struct BundleCatalog {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl BundleCatalog {
    /// The built-in catalog shipped with the product, version 1.
    pub fn builtin() -> Self {
        Self::from_templates(1, templates::all())
    }

    pub fn from_templates(version: u32, templates: Vec<CareBundleTemplate>) -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot { version, templates })),
        }
    }

    /// The current snapshot. Callers hold it for the duration of one
    /// compose so template versions never mix mid-computation.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the template set, bumping the version. Returns the new
    /// version number. In-flight composes keep their old snapshot.
    pub fn reload(&self, templates: Vec<CareBundleTemplate>) -> u32 {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let version = guard.version + 1;
        info!(version, count = templates.len(), "reloading care-bundle catalog");
        *guard = Arc::new(CatalogSnapshot { version, templates });
        version
    }
}

impl Default for BundleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
