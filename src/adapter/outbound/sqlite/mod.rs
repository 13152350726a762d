//! SQLite persistence adapters for the marketplace stores.

pub mod account_store;
pub mod database;
pub mod listing_store;
pub mod saved_store;

pub use account_store::SqliteAccountStore;
pub use listing_store::SqliteListingStore;
pub use saved_store::SqliteSavedListingStore;
