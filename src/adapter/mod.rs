//! Adapters binding the application core to infrastructure.

pub mod inbound;
pub mod outbound;
