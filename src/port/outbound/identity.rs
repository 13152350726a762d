//! Identity resolution port.

use std::future::Future;

use crate::domain::id::ExternalId;
use crate::error::Result;

/// Resolves the transport-level session to an optional caller identity.
///
/// Absence of an identity is a valid outcome; every action accepts it
/// and degrades personalization instead of failing.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self) -> impl Future<Output = Result<Option<ExternalId>>> + Send;
}
