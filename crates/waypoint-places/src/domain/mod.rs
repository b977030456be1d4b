//! Domain layer for the Places context.

pub mod commands;
pub mod rules;
