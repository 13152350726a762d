//! Identity resolver adapters.

use crate::domain::id::ExternalId;
use crate::error::Result;
use crate::port::outbound::identity::IdentityResolver;

/// Resolver over an identity fixed at construction time.
///
/// The CLI builds one from its `--user` flag (falling back to the
/// `AUTOLOT_USER` environment variable); a hosted deployment would swap
/// in a resolver backed by the identity provider's session verification.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityResolver {
    identity: Option<ExternalId>,
}

impl StaticIdentityResolver {
    #[must_use]
    pub fn new(identity: Option<ExternalId>) -> Self {
        Self { identity }
    }

    /// Build from an explicit value, falling back to `AUTOLOT_USER`.
    #[must_use]
    pub fn from_flag_or_env(flag: Option<String>) -> Self {
        let identity = flag
            .or_else(|| std::env::var("AUTOLOT_USER").ok())
            .filter(|s| !s.is_empty())
            .map(ExternalId::new);
        Self { identity }
    }
}

impl IdentityResolver for StaticIdentityResolver {
    async fn resolve(&self) -> Result<Option<ExternalId>> {
        Ok(self.identity.clone())
    }
}
