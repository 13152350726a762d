//! Autolot - car-marketplace listing actions.
//!
//! This crate provides the server-side data-access actions of a car
//! marketplace: a filtered/paginated listing search, a facet catalog
//! builder, per-identity saved listings with an atomic favorite toggle,
//! single-listing retrieval and an admin gate, all over a SQLite store.
//!
//! # Architecture
//!
//! The crate uses a ports-and-adapters layout:
//!
//! - **[`domain`]** - Store-agnostic types: listings, accounts, filter
//!   requests, the response envelope
//! - **[`port`]** - Trait seams for stores and identity resolution
//! - **[`adapter`]** - SQLite stores (Diesel ORM), the static identity
//!   resolver, and the inspection CLI
//! - **[`application`]** - The action surface itself, generic over the
//!   store traits so tests can substitute failing stores
//! - **[`config`]** - TOML configuration: database, logging, and the
//!   declarative request-shield rules
//! - **[`error`]** - Error types for the crate
//!
//! # Contract
//!
//! Every action returns a `{ success, data?, error?, pagination? }`
//! envelope. Read actions never raise; they degrade into a
//! `success: false` envelope (the catalog even keeps default data on
//! failure). The favorite toggle is the single raising operation.
//!
//! # Example
//!
//! ```no_run
//! use autolot::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
//! use autolot::adapter::outbound::sqlite::{
//!     SqliteAccountStore, SqliteListingStore, SqliteSavedListingStore,
//! };
//! use autolot::application::ListingActions;
//! use autolot::domain::filter::FilterRequest;
//!
//! # async fn example() -> autolot::error::Result<()> {
//! let pool = create_pool("autolot.db", 5)?;
//! run_migrations(&pool)?;
//! let actions = ListingActions::new(
//!     SqliteListingStore::new(pool.clone()),
//!     SqliteAccountStore::new(pool.clone()),
//!     SqliteSavedListingStore::new(pool),
//! );
//! let page = actions.filtered_listings(&FilterRequest::default(), None).await;
//! assert!(page.success);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
