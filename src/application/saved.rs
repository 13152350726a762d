//! Favorite toggle and saved-listings reader.

use tracing::warn;

use crate::application::identity::{resolve_caller, Caller};
use crate::application::ListingActions;
use crate::domain::id::{ExternalId, ListingId};
use crate::domain::listing::ListingCard;
use crate::domain::response::{Envelope, ToggleOutcome};
use crate::error::{Error, Result};
use crate::port::outbound::store::{AccountStore, ListingStore, SavedListingStore};

impl<L, A, S> ListingActions<L, A, S>
where
    L: ListingStore,
    A: AccountStore,
    S: SavedListingStore,
{
    /// Flip the saved relationship for (caller, listing).
    ///
    /// Unlike the read paths this raises: `Unauthorized` when no
    /// identity is supplied, `NotFound` when the identity maps to no
    /// account, and a generic failure when the store misbehaves.
    /// Callers must handle the `Err` branch explicitly.
    pub async fn toggle_saved(
        &self,
        listing_id: &ListingId,
        caller: Option<&ExternalId>,
    ) -> Result<Envelope<ToggleOutcome>> {
        let account = match resolve_caller(&self.accounts, caller)
            .await
            .map_err(|error| {
                warn!(error = %error, "favorite toggle failed");
                Error::Database("failed to update favorites".to_string())
            })? {
            Caller::Anonymous => return Err(Error::Unauthorized),
            Caller::Unknown => return Err(Error::NotFound("account".to_string())),
            Caller::Known(account) => account,
        };

        let saved = self
            .saved
            .toggle(&account.id, listing_id)
            .await
            .map_err(|error| {
                warn!(error = %error, listing_id = %listing_id, "favorite toggle failed");
                Error::Database("failed to update favorites".to_string())
            })?;

        let message = if saved {
            "listing added to favorites"
        } else {
            "listing removed from favorites"
        };
        Ok(Envelope::ok(ToggleOutcome {
            saved,
            message: message.to_string(),
        }))
    }

    /// Every listing the caller has saved, annotated `saved: true` by
    /// construction. Soft-fails into the envelope; never raises.
    pub async fn saved_listings(&self, caller: Option<&ExternalId>) -> Envelope<Vec<ListingCard>> {
        let account = match resolve_caller(&self.accounts, caller).await {
            Ok(Caller::Known(account)) => account,
            Ok(Caller::Anonymous) => return Envelope::err("Unauthorized"),
            Ok(Caller::Unknown) => return Envelope::err("account not found"),
            Err(error) => {
                warn!(error = %error, "saved listings lookup failed");
                return Envelope::err(error.to_string());
            }
        };

        match self.saved.listings(&account.id).await {
            Ok(listings) => Envelope::ok(
                listings
                    .iter()
                    .map(|listing| ListingCard::from_listing(listing, true))
                    .collect(),
            ),
            Err(error) => {
                warn!(error = %error, "saved listings lookup failed");
                Envelope::err(error.to_string())
            }
        }
    }
}
