//! Caller accounts resolved from the external identity provider.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::{AccountId, ExternalId};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    User,
    Admin,
}

impl AccountRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(Error::Parse(format!("unknown account role '{other}'"))),
        }
    }
}

/// An account known to the marketplace, keyed internally by
/// [`AccountId`] and externally by the provider-issued [`ExternalId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub external_id: ExternalId,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(external_id: impl Into<ExternalId>) -> Self {
        Self {
            id: AccountId::generate(),
            external_id: external_id.into(),
            role: AccountRole::User,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: AccountRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }
}
