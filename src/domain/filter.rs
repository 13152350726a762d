//! Filter requests and the derived facet catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Fallback price ceiling when the store holds no listings.
pub const DEFAULT_MAX_PRICE: f64 = 100_000.0;

/// A categorical filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Make,
    BodyType,
    FuelType,
    Transmission,
}

/// Constraint on one facet: a single value matches by equality, a set
/// matches by membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetFilter {
    One(String),
    Any(Vec<String>),
}

impl FacetFilter {
    /// Collapse caller-supplied values: none means unconstrained, one
    /// means equality, several mean set membership.
    #[must_use]
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => Some(Self::One(values.remove(0))),
            _ => Some(Self::Any(values)),
        }
    }
}

/// Caller-supplied search parameters. Every field is independently
/// optional; the absent ones impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub make: Option<FacetFilter>,
    pub body_type: Option<FacetFilter>,
    pub fuel_type: Option<FacetFilter>,
    pub transmission: Option<FacetFilter>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Case-insensitive substring matched against make, model or color.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl FilterRequest {
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    #[must_use]
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page().saturating_sub(1).saturating_mul(self.page_size())
    }
}

/// Observed price bounds across the whole store, flattened to floats
/// for the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Distinct facet values plus price bounds currently offered for
/// filtering. Recomputed on every request; never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCatalog {
    pub makes: Vec<String>,
    pub body_types: Vec<String>,
    pub fuel_types: Vec<String>,
    pub transmissions: Vec<String>,
    pub price_range: PriceRange,
}
