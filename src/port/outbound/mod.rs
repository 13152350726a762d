//! Outbound ports implemented by infrastructure adapters.

pub mod identity;
pub mod store;
