//! Shared test utilities and fixtures for catalog service tests

use crate::app::models::{Address, Center, Product, Route};
use std::sync::Arc;


/// Create a test center without address or route
pub fn create_basic_center(name: &str, production: i32) -> Center {
    let product = Product::new("Salmon Atlantico", "Premium", 5.5).unwrap();
    Center::basic(name, production, product).unwrap()
}

/// Create a test center located in `commune`, with a route to that address
pub fn create_located_center(name: &str, production: i32, commune: &str) -> Center {
    let product = Product::new("Chorito", "Granel", 1.2).unwrap();
    let address = Arc::new(Address::new("Camino Costero", "10", commune, "Los Lagos").unwrap());
    let route =
        Route::new("Inspeccion", "Ana Perez", "2024-05-01", Some(Arc::clone(&address))).unwrap();
    Center::new(name, production, product, Some(address), Some(route)).unwrap()
}

/// Names of the given centers, in order
pub fn names(centers: &[Center]) -> Vec<&str> {
    centers.iter().map(Center::name).collect()
}
