//! Shared fixtures for integration tests.

#![allow(dead_code)]

use autolot::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool,
};
use autolot::adapter::outbound::sqlite::{
    SqliteAccountStore, SqliteListingStore, SqliteSavedListingStore,
};
use autolot::application::ListingActions;
use autolot::domain::account::Account;
use autolot::domain::listing::Listing;

pub type SqliteActions =
    ListingActions<SqliteListingStore, SqliteAccountStore, SqliteSavedListingStore>;

/// One marketplace over a database, with direct store handles for
/// seeding next to the action surface under test.
pub struct World {
    pub pool: DbPool,
    pub actions: SqliteActions,
    pub listings: SqliteListingStore,
    pub accounts: SqliteAccountStore,
}

impl World {
    pub async fn seed_listing(&self, listing: &Listing) {
        self.listings.insert(listing).await.expect("seed listing");
    }

    pub async fn seed_account(&self, account: &Account) {
        self.accounts.insert(account).await.expect("seed account");
    }
}

/// World over a fresh in-memory database. A single pooled connection
/// keeps every handle on the same memory store.
pub fn memory_world() -> World {
    world_at(":memory:")
}

/// World over a database file, shared with an externally spawned binary.
pub fn world_at(database_url: &str) -> World {
    let pool = create_pool(database_url, 1).expect("create pool");
    run_migrations(&pool).expect("run migrations");

    let actions = ListingActions::new(
        SqliteListingStore::new(pool.clone()),
        SqliteAccountStore::new(pool.clone()),
        SqliteSavedListingStore::new(pool.clone()),
    );

    World {
        actions,
        listings: SqliteListingStore::new(pool.clone()),
        accounts: SqliteAccountStore::new(pool.clone()),
        pool,
    }
}
