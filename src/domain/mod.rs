//! Store-agnostic marketplace types: listings, accounts, filters and
//! the response envelope.

pub mod account;
pub mod filter;
pub mod id;
pub mod listing;
pub mod response;
