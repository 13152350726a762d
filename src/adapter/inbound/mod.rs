//! Inbound adapters driving the application core.

pub mod cli;
