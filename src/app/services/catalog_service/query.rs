//! Center listing, search and ordering
//!
//! This module provides the query methods of the catalog service: full
//! listing, commune search, production threshold filtering and name ordering.

use super::CatalogService;
use crate::app::models::Center;
use std::cmp::Ordering;

impl CatalogService {
    /// Get a copy of every center, in insertion order
    pub fn list_all(&self) -> Vec<Center> {
        self.centers.clone()
    }

    /// Find centers located in a commune (case-insensitive)
    ///
    /// Matches the trimmed query exactly against each center's address
    /// commune. Centers without an address never match.
    ///
    /// # Arguments
    /// * `region` - Commune to search for; `None` or a blank value matches nothing
    ///
    /// # Examples
    /// ```
    /// # use aquaculture_catalog::CatalogService;
    /// let service = CatalogService::default();
    /// assert!(service.find_by_region("Calbuco").is_empty());
    /// assert!(service.find_by_region(None).is_empty());
    /// ```
    pub fn find_by_region<'a>(&self, region: impl Into<Option<&'a str>>) -> Vec<Center> {
        let Some(region) = region.into().map(str::trim).filter(|r| !r.is_empty()) else {
            return Vec::new();
        };

        self.centers
            .iter()
            .filter(|center| {
                center
                    .commune()
                    .is_some_and(|commune| eq_ignore_case(commune, region))
            })
            .cloned()
            .collect()
    }

    /// Find centers whose production is at least `threshold` (inclusive)
    ///
    /// Any threshold is accepted; a negative one matches every center.
    pub fn filter_by_minimum_production(&self, threshold: i32) -> Vec<Center> {
        self.centers
            .iter()
            .filter(|center| center.production() >= threshold)
            .cloned()
            .collect()
    }

    /// Get the centers ordered by name, ignoring case
    ///
    /// The sort is stable: centers whose names compare equal keep their
    /// insertion order.
    pub fn sort_by_name(&self) -> Vec<Center> {
        let mut sorted = self.centers.clone();
        sorted.sort_by(|a, b| cmp_ignore_case(a.name(), b.name()));
        sorted
    }
}

/// Compare two strings by their lowercase characters
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Check two strings for equality ignoring case
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a, b) == Ordering::Equal
}
