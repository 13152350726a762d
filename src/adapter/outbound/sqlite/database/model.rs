//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{accounts, listings, saved_listings};

/// Database row for a listing.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = listings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListingRow {
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
}

/// Database row for an account.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountRow {
    pub id: String,
    pub external_id: String,
    pub role: String,
    pub created_at: String,
}

/// Database row for a saved relationship.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = saved_listings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SavedListingRow {
    pub id: String,
    pub account_id: String,
    pub listing_id: String,
    pub saved_at: String,
}
