//! Outbound adapters: persistence and identity resolution.

pub mod identity;
pub mod sqlite;
