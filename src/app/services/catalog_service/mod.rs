//! Catalog query service over a loaded collection of centers
//!
//! This module wraps a private copy of the loaded centers and answers
//! read-only queries. The service never hands out its internal storage:
//! every query returns a freshly built vector.

use crate::app::models::Center;

pub mod query;

#[cfg(test)]
pub mod tests;

/// Read-only query service over a catalog of centers
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    /// Private copy of the catalog, in insertion order
    pub(crate) centers: Vec<Center>,
}

impl CatalogService {
    /// Create a service holding its own copy of `centers`
    ///
    /// Later changes to the caller's collection do not affect the service.
    pub fn new(centers: &[Center]) -> Self {
        Self {
            centers: centers.to_vec(),
        }
    }

    /// Number of centers in the catalog
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

impl From<Vec<Center>> for CatalogService {
    fn from(centers: Vec<Center>) -> Self {
        Self { centers }
    }
}
