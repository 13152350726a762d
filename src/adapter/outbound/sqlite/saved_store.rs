//! SQLite saved-relationship store implementation.
//!
//! One row per (account, listing) bookmark, enforced by a composite
//! uniqueness constraint. The toggle runs inside an immediate
//! transaction so two racing flips cannot both observe the same state.

use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{ListingRow, SavedListingRow};
use crate::adapter::outbound::sqlite::database::schema::{listings, saved_listings};
use crate::adapter::outbound::sqlite::listing_store::SqliteListingStore;
use crate::domain::id::{AccountId, ListingId};
use crate::domain::listing::Listing;
use crate::error::{Error, Result};
use crate::port::outbound::store::SavedListingStore;
use std::collections::HashSet;

/// SQLite-backed saved-relationship store.
pub struct SqliteSavedListingStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteSavedListingStore {
    /// Create a new SQLite saved-listing store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>>
    {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }
}

impl SavedListingStore for SqliteSavedListingStore {
    async fn toggle(&self, account_id: &AccountId, listing_id: &ListingId) -> Result<bool> {
        let mut conn = self.conn()?;

        // Immediate transaction takes the write lock up front, so the
        // read and the conditional write form one atomic flip.
        conn.immediate_transaction(|conn| {
            let existing: Option<String> = saved_listings::table
                .filter(saved_listings::account_id.eq(account_id.as_str()))
                .filter(saved_listings::listing_id.eq(listing_id.as_str()))
                .select(saved_listings::id)
                .first(conn)
                .optional()?;

            match existing {
                Some(id) => {
                    diesel::delete(saved_listings::table.find(id)).execute(conn)?;
                    Ok(false)
                }
                None => {
                    let row = SavedListingRow {
                        id: Uuid::new_v4().to_string(),
                        account_id: account_id.to_string(),
                        listing_id: listing_id.to_string(),
                        saved_at: Utc::now().to_rfc3339(),
                    };
                    diesel::insert_into(saved_listings::table)
                        .values(&row)
                        .execute(conn)?;
                    Ok(true)
                }
            }
        })
        .map_err(|e: diesel::result::Error| Error::Database(e.to_string()))
    }

    async fn exists(&self, account_id: &AccountId, listing_id: &ListingId) -> Result<bool> {
        let mut conn = self.conn()?;

        let found: Option<String> = saved_listings::table
            .filter(saved_listings::account_id.eq(account_id.as_str()))
            .filter(saved_listings::listing_id.eq(listing_id.as_str()))
            .select(saved_listings::id)
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn listing_ids(&self, account_id: &AccountId) -> Result<HashSet<ListingId>> {
        let mut conn = self.conn()?;

        let ids: Vec<String> = saved_listings::table
            .filter(saved_listings::account_id.eq(account_id.as_str()))
            .select(saved_listings::listing_id)
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(ids.into_iter().map(ListingId::from).collect())
    }

    async fn listings(&self, account_id: &AccountId) -> Result<Vec<Listing>> {
        let mut conn = self.conn()?;

        let rows: Vec<ListingRow> = saved_listings::table
            .inner_join(listings::table)
            .filter(saved_listings::account_id.eq(account_id.as_str()))
            .select(ListingRow::as_select())
            .order(listings::created_at.desc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(SqliteListingStore::from_row).collect()
    }
}
