//! Data Transfer Objects for the HTTP API.
//!
//! Registrations and schedules are serialized as-is; only the envelopes
//! live here.

use serde::{Deserialize, Serialize};

use crate::models::Registration;

pub use crate::models::{Schedule, ScheduleConfig};
pub use crate::services::ScheduleConfigPatch;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Registration store status
    pub repository: String,
}

/// Registration list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationListResponse {
    pub registrations: Vec<Registration>,
    /// Total count
    pub total: usize,
}
