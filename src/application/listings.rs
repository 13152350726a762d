//! Listing query engine: filtered search and single-listing retrieval.

use std::collections::HashSet;

use tracing::warn;

use crate::application::identity::{resolve_caller_soft, Caller};
use crate::application::ListingActions;
use crate::domain::filter::FilterRequest;
use crate::domain::id::{ExternalId, ListingId};
use crate::domain::listing::ListingCard;
use crate::domain::response::{Envelope, PageInfo};
use crate::port::outbound::store::{AccountStore, ListingStore, SavedListingStore};

impl<L, A, S> ListingActions<L, A, S>
where
    L: ListingStore,
    A: AccountStore,
    S: SavedListingStore,
{
    /// Run a filtered, paginated search over available listings.
    ///
    /// The page contents and the total count run concurrently against
    /// the same predicate. Saved annotation is best-effort: a missing or
    /// unresolvable identity marks every card `saved: false` and never
    /// fails the request.
    pub async fn filtered_listings(
        &self,
        request: &FilterRequest,
        caller: Option<&ExternalId>,
    ) -> Envelope<Vec<ListingCard>> {
        let (page, total) = tokio::join!(
            self.listings.search(request),
            self.listings.count(request),
        );
        let (page, total) = match (page, total) {
            (Ok(page), Ok(total)) => (page, total),
            (Err(error), _) | (_, Err(error)) => {
                warn!(error = %error, "listing search failed");
                return Envelope::err(error.to_string());
            }
        };

        let saved_ids = self.saved_ids_for(caller).await;
        let cards = page
            .iter()
            .map(|listing| ListingCard::from_listing(listing, saved_ids.contains(&listing.id)))
            .collect();

        Envelope::ok_paged(
            cards,
            PageInfo::new(total, request.page(), request.page_size()),
        )
    }

    /// Fetch one listing by id, regardless of status.
    pub async fn listing(
        &self,
        id: &ListingId,
        caller: Option<&ExternalId>,
    ) -> Envelope<ListingCard> {
        let listing = match self.listings.find(id).await {
            Ok(Some(listing)) => listing,
            Ok(None) => return Envelope::err("listing not found"),
            Err(error) => {
                warn!(error = %error, listing_id = %id, "listing lookup failed");
                return Envelope::err(error.to_string());
            }
        };

        let saved = match resolve_caller_soft(&self.accounts, caller).await {
            Caller::Known(account) => self
                .saved
                .exists(&account.id, id)
                .await
                .unwrap_or(false),
            _ => false,
        };

        Envelope::ok(ListingCard::from_listing(&listing, saved))
    }

    /// Ids of the caller's saved listings, or the empty set for
    /// anonymous and unresolvable callers.
    pub(crate) async fn saved_ids_for(&self, caller: Option<&ExternalId>) -> HashSet<ListingId> {
        match resolve_caller_soft(&self.accounts, caller).await {
            Caller::Known(account) => {
                self.saved.listing_ids(&account.id).await.unwrap_or_default()
            }
            _ => HashSet::new(),
        }
    }
}
