//! # Festival Schedule Backend
//!
//! Generates the printable running order ("desfășurător") of a music
//! festival from its confirmed registrations.
//!
//! ## Pipeline
//!
//! ```text
//! registrations ─► classify ─► flatten ─► group & sort ─► allocate ─► assemble
//! ```
//!
//! Each confirmed or paid registration contributes one item per piece. Items
//! are grouped into canonical sections, laid out in a fixed section order,
//! sorted youngest first within a section, and given consecutive time slots.
//!
//! ## Architecture
//!
//! - [`models`]: registrations, section keys, clock times and schedule types
//! - [`scheduler`]: the pure generation pipeline
//! - [`db`]: registration store (repository pattern)
//! - [`services`]: store snapshot + generation, thin CRUD wrappers
//! - [`config`]: `festival.toml` loading
//! - [`http`]: Axum-based HTTP server and request handlers

// RepositoryError carries rich context
#![allow(clippy::result_large_err)]

pub mod config;
pub mod db;
pub mod models;
pub mod scheduler;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
