//! leadintake - consent-gated lead intake service
//!
//! Accepts landing page form submissions on `POST /api/lead`, enforces the
//! consent checkbox and required contact fields, and stores each accepted
//! submission as an immutable lead row.
//!
//! # Architecture
//! - `api`: HTTP services and middleware
//! - `services`: lead validation and submission
//! - `storage`: SeaORM-backed lead store with lazy schema provisioning
//! - `interfaces`: operator CLI commands
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and panic handling

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
