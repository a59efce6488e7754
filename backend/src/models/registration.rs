//! Registration records as supplied by the registration store.
//!
//! These are read-only to the schedule generator. Field names follow the
//! camelCase contract of the registration store's JSON export.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Individual performer or group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationKind {
    Individual,
    Group,
}

/// Payment / confirmation state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Paid,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl RegistrationStatus {
    /// Only confirmed or paid registrations go on the running order.
    pub fn is_eligible(&self) -> bool {
        matches!(self, RegistrationStatus::Confirmed | RegistrationStatus::Paid)
    }
}

/// One performed work within a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub name: String,
    #[serde(default)]
    pub artist: String,
    /// Free-text section description typed by the registrant
    #[serde(default, alias = "section")]
    pub section_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Store-assigned when blank
    #[serde(default)]
    pub id: String,
    pub kind: RegistrationKind,
    /// The individual's name or the group's name
    pub participant_name: String,
    #[serde(default)]
    pub age_category: String,
    /// Only present for individuals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_age: Option<u32>,
    #[serde(default)]
    pub teacher_or_coordinator: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub pieces: Vec<Piece>,
    pub status: RegistrationStatus,
}

impl Registration {
    pub fn is_eligible(&self) -> bool {
        self.status.is_eligible()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RegistrationsInput {
    Wrapped { registrations: Vec<Registration> },
    Bare(Vec<Registration>),
}

/// Parse registrations from JSON.
///
/// Accepts either a bare array or an object with a `registrations` array.
pub fn parse_registrations_json_str(json: &str) -> Result<Vec<Registration>> {
    let input: RegistrationsInput =
        serde_json::from_str(json).context("Failed to deserialize registrations JSON")?;
    Ok(match input {
        RegistrationsInput::Wrapped { registrations } => registrations,
        RegistrationsInput::Bare(registrations) => registrations,
    })
}

/// Read and parse a registrations JSON file.
pub fn load_registrations_file<P: AsRef<Path>>(path: P) -> Result<Vec<Registration>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read registrations file {}", path.display()))?;
    parse_registrations_json_str(&content)
        .with_context(|| format!("Invalid registrations file {}", path.display()))
}
