//! SQLite account store implementation.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::AccountRow;
use crate::adapter::outbound::sqlite::database::schema::accounts;
use crate::domain::account::Account;
use crate::domain::id::{AccountId, ExternalId};
use crate::error::{Error, Result};
use crate::port::outbound::store::AccountStore;

/// SQLite-backed account store.
pub struct SqliteAccountStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteAccountStore {
    /// Create a new SQLite account store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn from_row(row: AccountRow) -> Result<Account> {
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Account {
            id: AccountId::from(row.id),
            external_id: ExternalId::from(row.external_id),
            role: row.role.parse()?,
            created_at,
        })
    }

    /// Seed helper for tests and fixtures; account provisioning belongs
    /// to the onboarding path, not this crate.
    #[cfg(any(test, feature = "testkit"))]
    pub async fn insert(&self, account: &Account) -> Result<()> {
        let row = AccountRow {
            id: account.id.to_string(),
            external_id: account.external_id.to_string(),
            role: account.role.to_string(),
            created_at: account.created_at.to_rfc3339(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(accounts::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }
}

impl AccountStore for SqliteAccountStore {
    async fn find_by_external(&self, external_id: &ExternalId) -> Result<Option<Account>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let row: Option<AccountRow> = accounts::table
            .filter(accounts::external_id.eq(external_id.as_str()))
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }
}
