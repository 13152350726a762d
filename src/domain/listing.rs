//! Vehicle listing types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::id::ListingId;
use crate::error::Error;

/// Lifecycle status of a listing. Only `Available` listings appear in
/// search results; a listing remains individually retrievable by id in
/// any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Available,
    Pending,
    Sold,
}

impl ListingStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "pending" => Ok(Self::Pending),
            "sold" => Ok(Self::Sold),
            other => Err(Error::Parse(format!("unknown listing status '{other}'"))),
        }
    }
}

/// One vehicle offered for sale.
///
/// Created and mutated by the ingestion/admin path; the actions in this
/// crate treat listings as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub body_type: String,
    pub fuel_type: String,
    pub transmission: String,
    pub color: String,
    /// Non-negative asking price.
    pub price: Decimal,
    pub mileage: i32,
    pub description: String,
    pub featured: bool,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Create an available listing with sensible defaults for the
    /// descriptive fields.
    pub fn new(make: impl Into<String>, model: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ListingId::generate(),
            make: make.into(),
            model: model.into(),
            year: 2020,
            body_type: "Sedan".to_string(),
            fuel_type: "Gasoline".to_string(),
            transmission: "Automatic".to_string(),
            color: "Black".to_string(),
            price,
            mileage: 0,
            description: String::new(),
            featured: false,
            status: ListingStatus::Available,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = body_type.into();
        self
    }

    #[must_use]
    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    #[must_use]
    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Serialized listing handed to callers.
///
/// Price is flattened to a float and the timestamp to an ISO-8601 string
/// so the envelope never leaks database-native types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCard {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub body_type: String,
    pub fuel_type: String,
    pub transmission: String,
    pub color: String,
    pub price: f64,
    pub mileage: i32,
    pub description: String,
    pub featured: bool,
    pub status: String,
    pub created_at: String,
    /// Whether the requesting identity has saved this listing. Always
    /// false for anonymous callers.
    pub saved: bool,
}

impl ListingCard {
    #[must_use]
    pub fn from_listing(listing: &Listing, saved: bool) -> Self {
        Self {
            id: listing.id.to_string(),
            make: listing.make.clone(),
            model: listing.model.clone(),
            year: listing.year,
            body_type: listing.body_type.clone(),
            fuel_type: listing.fuel_type.clone(),
            transmission: listing.transmission.clone(),
            color: listing.color.clone(),
            price: listing.price.to_f64().unwrap_or(0.0),
            mileage: listing.mileage,
            description: listing.description.clone(),
            featured: listing.featured,
            status: listing.status.to_string(),
            created_at: listing.created_at.to_rfc3339(),
            saved,
        }
    }
}
