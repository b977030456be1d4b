//! Application layer for the Places context.

pub mod command_handlers;
pub mod query_handlers;
