//! System-level modules
//!
//! - Logging initialization
//! - Panic hook installation

pub mod logging;
pub mod panic_handler;
