//! Admin gate: boolean authorization check for the admin surface.

use crate::application::identity::{resolve_caller_soft, Caller};
use crate::application::ListingActions;
use crate::domain::id::ExternalId;
use crate::domain::response::{AdminGate, Envelope};
use crate::port::outbound::store::{AccountStore, ListingStore, SavedListingStore};

impl<L, A, S> ListingActions<L, A, S>
where
    L: ListingStore,
    A: AccountStore,
    S: SavedListingStore,
{
    /// Report whether the caller is an authorized admin.
    ///
    /// Anonymous or unknown callers get an Unauthorized envelope; a
    /// known non-admin gets `authorized: false`.
    pub async fn admin(&self, caller: Option<&ExternalId>) -> Envelope<AdminGate> {
        match resolve_caller_soft(&self.accounts, caller).await {
            Caller::Known(account) => Envelope::ok(AdminGate {
                authorized: account.is_admin(),
            }),
            _ => Envelope::err("Unauthorized"),
        }
    }
}
