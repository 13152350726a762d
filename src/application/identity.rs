//! Soft identity resolution shared by every personalized action.

use crate::domain::account::Account;
use crate::domain::id::ExternalId;
use crate::error::Result;
use crate::port::outbound::store::AccountStore;

/// Resolution of an optional caller identity against the account store.
#[derive(Debug, Clone, PartialEq)]
pub enum Caller {
    /// No identity was supplied.
    Anonymous,
    /// An identity was supplied but no account matches it.
    Unknown,
    /// The identity maps to a known account.
    Known(Account),
}

/// Resolve an optional external identity to a [`Caller`].
///
/// Absence of an identity is not an error; only a store failure is.
pub async fn resolve_caller<A: AccountStore>(
    accounts: &A,
    external_id: Option<&ExternalId>,
) -> Result<Caller> {
    let Some(external_id) = external_id else {
        return Ok(Caller::Anonymous);
    };
    Ok(match accounts.find_by_external(external_id).await? {
        Some(account) => Caller::Known(account),
        None => Caller::Unknown,
    })
}

/// Like [`resolve_caller`], but folds store failures into
/// [`Caller::Anonymous`] so personalization stays best-effort.
pub async fn resolve_caller_soft<A: AccountStore>(
    accounts: &A,
    external_id: Option<&ExternalId>,
) -> Caller {
    match resolve_caller(accounts, external_id).await {
        Ok(caller) => caller,
        Err(error) => {
            tracing::debug!(error = %error, "identity resolution failed; treating caller as anonymous");
            Caller::Anonymous
        }
    }
}
