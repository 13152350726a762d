//! Persistence ports for listings, accounts and saved relationships.

use std::collections::HashSet;
use std::future::Future;

use crate::domain::account::Account;
use crate::domain::filter::{Facet, FilterRequest};
use crate::domain::id::{AccountId, ExternalId, ListingId};
use crate::domain::listing::Listing;
use crate::error::Result;

/// Read-only storage operations over listings.
pub trait ListingStore: Send + Sync {
    /// Find a listing by id, regardless of status.
    fn find(&self, id: &ListingId) -> impl Future<Output = Result<Option<Listing>>> + Send;

    /// Load one page of available listings matching the filter, newest
    /// first.
    fn search(&self, filter: &FilterRequest) -> impl Future<Output = Result<Vec<Listing>>> + Send;

    /// Count all available listings matching the filter.
    fn count(&self, filter: &FilterRequest) -> impl Future<Output = Result<i64>> + Send;

    /// Distinct values for one facet, sorted ascending.
    fn distinct(&self, facet: Facet) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Observed (min, max) price across all listings, or `None` when the
    /// store is empty.
    fn price_bounds(&self) -> impl Future<Output = Result<Option<(f64, f64)>>> + Send;
}

/// Storage operations over accounts.
pub trait AccountStore: Send + Sync {
    /// Map a provider-issued identity to its account, if one exists.
    fn find_by_external(
        &self,
        external_id: &ExternalId,
    ) -> impl Future<Output = Result<Option<Account>>> + Send;
}

/// Storage operations over the account-to-listing saved relationship.
///
/// At most one relationship exists per (account, listing) pair.
pub trait SavedListingStore: Send + Sync {
    /// Flip the relationship atomically: delete it if present, create it
    /// if absent. Returns the resulting saved state.
    fn toggle(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Whether the relationship exists for the composite key.
    fn exists(
        &self,
        account_id: &AccountId,
        listing_id: &ListingId,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Ids of every listing the account has saved.
    fn listing_ids(
        &self,
        account_id: &AccountId,
    ) -> impl Future<Output = Result<HashSet<ListingId>>> + Send;

    /// Every listing the account has saved, newest first.
    fn listings(
        &self,
        account_id: &AccountId,
    ) -> impl Future<Output = Result<Vec<Listing>>> + Send;
}
