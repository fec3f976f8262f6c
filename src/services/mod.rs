//! Service layer for business logic
//!
//! Shared by the HTTP handlers and the operator CLI.

mod lead_service;

pub use lead_service::*;
