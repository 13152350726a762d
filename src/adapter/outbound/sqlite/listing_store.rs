//! SQLite listing store implementation.
//!
//! Translates [`FilterRequest`] values into Diesel predicates over the
//! `listings` table. Search results are always constrained to available
//! listings; by-id lookup is not.

use chrono::{DateTime, Utc};
use diesel::dsl::{max, min};
use diesel::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::ListingRow;
use crate::adapter::outbound::sqlite::database::schema::listings;
use crate::domain::filter::{Facet, FacetFilter, FilterRequest};
use crate::domain::id::ListingId;
use crate::domain::listing::{Listing, ListingStatus};
use crate::error::{Error, Result};
use crate::port::outbound::store::ListingStore;

type BoxedListingQuery = listings::BoxedQuery<'static, diesel::sqlite::Sqlite>;

/// Escape LIKE metacharacters so a search term matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// SQLite-backed listing store.
pub struct SqliteListingStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteListingStore {
    /// Create a new SQLite listing store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(listing: &Listing) -> ListingRow {
        ListingRow {
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
        }
    }

    pub(crate) fn from_row(row: ListingRow) -> Result<Listing> {
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);
        let price = Decimal::from_f64(row.price)
            .ok_or_else(|| Error::Parse(format!("invalid price {}", row.price)))?;

        Ok(Listing {
            id: ListingId::from(row.id),
            make: row.make,
            model: row.model,
            year: row.year,
            body_type: row.body_type,
            fuel_type: row.fuel_type,
            transmission: row.transmission,
            color: row.color,
            price,
            mileage: row.mileage,
            description: row.description,
            featured: row.featured,
            status: row.status.parse()?,
            created_at,
        })
    }

    /// Build the conjunction of predicates for a filter request. Every
    /// clause is optional except the status constraint.
    fn filtered(filter: &FilterRequest) -> BoxedListingQuery {
        let mut query = listings::table
            .into_boxed()
            .filter(listings::status.eq(ListingStatus::Available.as_str()));

        match &filter.make {
            Some(FacetFilter::One(value)) => {
                query = query.filter(listings::make.eq(value.clone()));
            }
            Some(FacetFilter::Any(values)) => {
                query = query.filter(listings::make.eq_any(values.clone()));
            }
            None => {}
        }
        match &filter.body_type {
            Some(FacetFilter::One(value)) => {
                query = query.filter(listings::body_type.eq(value.clone()));
            }
            Some(FacetFilter::Any(values)) => {
                query = query.filter(listings::body_type.eq_any(values.clone()));
            }
            None => {}
        }
        match &filter.fuel_type {
            Some(FacetFilter::One(value)) => {
                query = query.filter(listings::fuel_type.eq(value.clone()));
            }
            Some(FacetFilter::Any(values)) => {
                query = query.filter(listings::fuel_type.eq_any(values.clone()));
            }
            None => {}
        }
        match &filter.transmission {
            Some(FacetFilter::One(value)) => {
                query = query.filter(listings::transmission.eq(value.clone()));
            }
            Some(FacetFilter::Any(values)) => {
                query = query.filter(listings::transmission.eq_any(values.clone()));
            }
            None => {}
        }

        if let Some(min_price) = filter.min_price {
            query = query.filter(listings::price.ge(min_price.to_f64().unwrap_or(0.0)));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(listings::price.le(max_price.to_f64().unwrap_or(f64::MAX)));
        }

        // SQLite LIKE is case-insensitive for ASCII, matching the
        // insensitive-substring contract. The term is escaped so `%`
        // and `_` match literally instead of acting as wildcards.
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", escape_like(search));
            query = query.filter(
                listings::make
                    .like(pattern.clone())
                    .escape('\\')
                    .or(listings::model.like(pattern.clone()).escape('\\'))
                    .or(listings::color.like(pattern).escape('\\')),
            );
        }

        query
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>>
    {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    /// Seed helper for tests and fixtures; listing ingestion itself is
    /// owned by the admin path, not this crate.
    #[cfg(any(test, feature = "testkit"))]
    pub async fn insert(&self, listing: &Listing) -> Result<()> {
        let row = Self::to_row(listing);
        let mut conn = self.conn()?;

        diesel::insert_into(listings::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }
}

impl ListingStore for SqliteListingStore {
    async fn find(&self, id: &ListingId) -> Result<Option<Listing>> {
        let mut conn = self.conn()?;

        let row: Option<ListingRow> = listings::table
            .find(id.as_str())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    async fn search(&self, filter: &FilterRequest) -> Result<Vec<Listing>> {
        let mut conn = self.conn()?;

        let rows: Vec<ListingRow> = Self::filtered(filter)
            .order(listings::created_at.desc())
            .limit(filter.page_size())
            .offset(filter.offset())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn count(&self, filter: &FilterRequest) -> Result<i64> {
        let mut conn = self.conn()?;

        Self::filtered(filter)
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }

    async fn distinct(&self, facet: Facet) -> Result<Vec<String>> {
        let mut conn = self.conn()?;

        let values = match facet {
            Facet::Make => listings::table
                .select(listings::make)
                .distinct()
                .order(listings::make.asc())
                .load(&mut conn),
            Facet::BodyType => listings::table
                .select(listings::body_type)
                .distinct()
                .order(listings::body_type.asc())
                .load(&mut conn),
            Facet::FuelType => listings::table
                .select(listings::fuel_type)
                .distinct()
                .order(listings::fuel_type.asc())
                .load(&mut conn),
            Facet::Transmission => listings::table
                .select(listings::transmission)
                .distinct()
                .order(listings::transmission.asc())
                .load(&mut conn),
        };

        values.map_err(|e| Error::Database(e.to_string()))
    }

    async fn price_bounds(&self) -> Result<Option<(f64, f64)>> {
        let mut conn = self.conn()?;

        let (lo, hi): (Option<f64>, Option<f64>) = listings::table
            .select((min(listings::price), max(listings::price)))
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(lo.zip(hi))
    }
}
