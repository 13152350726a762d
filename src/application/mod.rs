//! Application services: the marketplace actions exposed to callers.
//!
//! Every action is a stateless request handler over injected store
//! handles. Read paths never raise; they fold failures into the
//! response envelope. The favorite toggle is the one deliberate
//! exception and returns `Err` for its unauthorized and internal
//! failure cases.

mod admin;
mod catalog;
mod identity;
mod listings;
mod saved;

pub use identity::{resolve_caller, resolve_caller_soft, Caller};

use crate::port::outbound::store::{AccountStore, ListingStore, SavedListingStore};

/// The marketplace action surface, generic over its store handles so
/// tests can substitute failing or in-memory implementations.
pub struct ListingActions<L, A, S> {
    listings: L,
    accounts: A,
    saved: S,
}

impl<L, A, S> ListingActions<L, A, S>
where
    L: ListingStore,
    A: AccountStore,
    S: SavedListingStore,
{
    /// Create the action surface over explicitly constructed stores.
    pub fn new(listings: L, accounts: A, saved: S) -> Self {
        Self {
            listings,
            accounts,
            saved,
        }
    }
}
