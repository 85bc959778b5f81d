//! Center record parsing from delimited lines
//!
//! This module turns one physical line into a [`LineOutcome`]:
//! - Basic lines (6 columns): center and product
//! - Full lines (12 columns): center, product, address and route
//!
//! Numeric columns are parsed before any record is built, and every record
//! goes through its validating constructor.

use crate::app::models::{Address, Center, Product, Route};
use crate::constants::{BASIC_COLUMN_COUNT, FIELD_DELIMITER, FULL_COLUMN_COUNT, columns};
use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Record shape detected from the column count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// Center and product only
    Basic,
    /// Center, product, address and route
    Full,
}

impl LineShape {
    /// Shape for a column count, if it is one of the accepted counts
    pub fn from_column_count(count: usize) -> Option<Self> {
        match count {
            BASIC_COLUMN_COUNT => Some(Self::Basic),
            FULL_COLUMN_COUNT => Some(Self::Full),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for LineShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of processing a single physical line
#[derive(Debug)]
pub enum LineOutcome {
    /// Header line of a CSV source, discarded
    Header,
    /// Empty or whitespace-only line, skipped silently
    Blank,
    /// Line produced a valid center
    Parsed { shape: LineShape, center: Center },
    /// Line was rejected; `shape` is `None` when the column count was wrong
    Skipped {
        shape: Option<LineShape>,
        error: Error,
    },
}

impl LineOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// Split a line on the field delimiter
///
/// There is no quoting or escaping. Trailing empty fields are dropped, so
/// `a;b;` yields two fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse one data line into a center
///
/// Header handling belongs to the caller; this function treats every
/// non-blank line as data.
pub fn parse_line(line: &str) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Blank;
    }

    let fields = split_fields(line);
    let Some(shape) = LineShape::from_column_count(fields.len()) else {
        return LineOutcome::Skipped {
            shape: None,
            error: Error::column_count(fields.len(), BASIC_COLUMN_COUNT, FULL_COLUMN_COUNT),
        };
    };

    let parsed = match shape {
        LineShape::Basic => parse_basic_center(&fields),
        LineShape::Full => parse_full_center(&fields),
    };

    match parsed {
        Ok(center) => LineOutcome::Parsed { shape, center },
        Err(error) => LineOutcome::Skipped {
            shape: Some(shape),
            error,
        },
    }
}

/// Build a center with no address or route from the basic columns
///
/// The commune column is read but not stored: a basic center has no address.
pub fn parse_basic_center(fields: &[&str]) -> Result<Center> {
    expect_columns(fields, BASIC_COLUMN_COUNT)?;
    let production = parse_production(fields[columns::PRODUCTION])?;
    let price = parse_price(fields[columns::PRODUCT_PRICE])?;

    let product = Product::new(
        fields[columns::PRODUCT_NAME],
        fields[columns::PRODUCT_CATEGORY],
        price,
    )?;

    Center::basic(fields[columns::CENTER_NAME], production, product)
}

/// Build a center with a shared address and route from the full columns
///
/// The address commune comes from the second column; the ninth column only
/// feeds the secondary region.
pub fn parse_full_center(fields: &[&str]) -> Result<Center> {
    expect_columns(fields, FULL_COLUMN_COUNT)?;
    let production = parse_production(fields[columns::PRODUCTION])?;
    let price = parse_price(fields[columns::PRODUCT_PRICE])?;

    let address = Arc::new(Address::new(
        fields[columns::STREET],
        fields[columns::NUMBER],
        fields[columns::COMMUNE],
        fields[columns::REGION],
    )?);

    let route = Route::new(
        fields[columns::ROUTE_NAME],
        fields[columns::ROUTE_RESPONSIBLE],
        fields[columns::ROUTE_DATE],
        Some(Arc::clone(&address)),
    )?;

    let product = Product::new(
        fields[columns::PRODUCT_NAME],
        fields[columns::PRODUCT_CATEGORY],
        price,
    )?;

    Center::new(
        fields[columns::CENTER_NAME],
        production,
        product,
        Some(address),
        Some(route),
    )
}

fn expect_columns(fields: &[&str], expected: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(Error::column_count(
            fields.len(),
            BASIC_COLUMN_COUNT,
            FULL_COLUMN_COUNT,
        ));
    }
    Ok(())
}

fn parse_production(raw: &str) -> Result<i32> {
    let value = raw.trim();
    value
        .parse::<i32>()
        .map_err(|e| Error::number_format("production", value, e))
}

fn parse_price(raw: &str) -> Result<f64> {
    let value = raw.trim();
    value
        .parse::<f64>()
        .map_err(|e| Error::number_format("product price", value, e))
}
