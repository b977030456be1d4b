//! Waypoint Core — error taxonomy and response envelope.
//!
//! This crate defines the closed set of domain error kinds, the categories
//! clients use to decide how to display them, and the uniform envelope every
//! endpoint answers with. It contains no transport code.

pub mod auth;
pub mod category;
pub mod envelope;
pub mod error;
pub mod repository;
pub mod sort;
pub mod validation;
