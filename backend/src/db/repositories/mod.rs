//! Repository implementations module.
//!
//! - `local`: In-memory implementation for the server, the CLI and tests
pub mod local;

pub use local::LocalRepository;
