//! Data models for the aquaculture catalog
//!
//! This module contains the validated record types loaded from catalog files:
//! the [`Center`] aggregate and the [`Product`], [`Address`] and [`Route`]
//! values it is composed of. Every type is built through a smart constructor
//! that returns an error instead of producing an invalid instance, and fields
//! are only readable through accessors once constructed.

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Trim a required text field, rejecting blank values
fn required_text(field: &str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::data_validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; absent values become empty strings
fn optional_text(value: impl Into<String>) -> String {
    value.into().trim().to_string()
}

// =============================================================================
// Address
// =============================================================================

/// Physical location of a center or branch
///
/// The commune is the primary region used for lookups and is always
/// non-empty; street, number and the secondary region may be empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    street: String,
    number: String,
    commune: String,
    region: String,
}

impl Address {
    /// Create a new Address with validation
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        commune: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            street: optional_text(street),
            number: optional_text(number),
            commune: required_text("Commune", commune)?,
            region: optional_text(region),
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Primary region ("comuna"), matched by region searches
    pub fn commune(&self) -> &str {
        &self.commune
    }

    /// Secondary administrative region ("región")
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}",
            self.street, self.number, self.commune, self.region
        )
    }
}

// =============================================================================
// Product
// =============================================================================

/// Catalog item produced by a center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    category: String,
    price: f64,
}

impl Product {
    /// Create a new Product with validation
    ///
    /// # Errors
    /// * `Error::DataValidation` if the name or category is blank, or the
    ///   price is negative or not a finite number
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64) -> Result<Self> {
        let name = required_text("Product name", name)?;
        let category = required_text("Product category", category)?;

        if !price.is_finite() {
            return Err(Error::data_validation(format!(
                "Product price must be a finite number, got {}",
                price
            )));
        }
        if price < 0.0 {
            return Err(Error::data_validation(format!(
                "Product price cannot be negative, got {}",
                price
            )));
        }

        Ok(Self {
            name,
            category,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Unit price, never negative
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) @ {}", self.name, self.category, self.price)
    }
}

// =============================================================================
// Route
// =============================================================================

/// Scheduled visit or inspection, optionally tied to a branch address
///
/// The branch is a shared reference to an existing [`Address`], not a copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    name: String,
    responsible: String,
    scheduled_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<Arc<Address>>,
}

impl Route {
    /// Create a new Route with validation
    ///
    /// The scheduled date is kept as free text.
    pub fn new(
        name: impl Into<String>,
        responsible: impl Into<String>,
        scheduled_date: impl Into<String>,
        branch: Option<Arc<Address>>,
    ) -> Result<Self> {
        Ok(Self {
            name: required_text("Route name", name)?,
            responsible: required_text("Route responsible", responsible)?,
            scheduled_date: required_text("Route date", scheduled_date)?,
            branch,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn responsible(&self) -> &str {
        &self.responsible
    }

    pub fn scheduled_date(&self) -> &str {
        &self.scheduled_date
    }

    /// Address of the branch where the route takes place, if any
    pub fn branch(&self) -> Option<&Arc<Address>> {
        self.branch.as_ref()
    }
}

// =============================================================================
// Center
// =============================================================================

/// Aquaculture production center, the aggregate root of the catalog
///
/// A center always has a non-empty name, a non-negative production quantity
/// and a product. Address and route are optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Center {
    name: String,
    production: i32,
    product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Arc<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<Route>,
}

impl Center {
    /// Create a new Center with validation
    ///
    /// # Errors
    /// * `Error::DataValidation` if the name is blank or production is negative
    pub fn new(
        name: impl Into<String>,
        production: i32,
        product: Product,
        address: Option<Arc<Address>>,
        route: Option<Route>,
    ) -> Result<Self> {
        let name = required_text("Center name", name)?;

        if production < 0 {
            return Err(Error::data_validation(format!(
                "Production cannot be negative, got {}",
                production
            )));
        }

        Ok(Self {
            name,
            production,
            product,
            address,
            route,
        })
    }

    /// Create a Center carrying only its product, without address or route
    pub fn basic(name: impl Into<String>, production: i32, product: Product) -> Result<Self> {
        Self::new(name, production, product, None, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn production(&self) -> i32 {
        self.production
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn address(&self) -> Option<&Arc<Address>> {
        self.address.as_ref()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Commune of the center's address, if it has one
    pub fn commune(&self) -> Option<&str> {
        self.address.as_deref().map(Address::commune)
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [production={}, product={}",
            self.name, self.production, self.product
        )?;
        if let Some(address) = &self.address {
            write!(f, ", address={}", address)?;
        }
        if let Some(route) = &self.route {
            write!(f, ", route={} ({})", route.name, route.scheduled_date)?;
        }
        write!(f, "]")
    }
}
