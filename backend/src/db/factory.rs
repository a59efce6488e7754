//! Repository factory for dependency injection.
//!
//! Creates the registration store selected by configuration, optionally
//! seeded from a registrations JSON export.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::info;

use super::repositories::LocalRepository;
use super::repository::{ErrorContext, RegistrationRepository, RepositoryError, RepositoryResult};
use crate::config::RepositorySettings;
use crate::models::load_registrations_file;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    /// Defaults to Local.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Local)
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn RegistrationRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository seeded from a registrations JSON file.
    pub fn create_local_seeded<P: AsRef<Path>>(
        seed_file: P,
    ) -> RepositoryResult<Arc<dyn RegistrationRepository>> {
        let path = seed_file.as_ref();
        let registrations = load_registrations_file(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("{:#}", e),
                ErrorContext::new("seed_repository").with_details(path.display().to_string()),
            )
        })?;
        info!(
            "Seeded local repository with {} registrations from {}",
            registrations.len(),
            path.display()
        );
        Ok(Arc::new(LocalRepository::with_registrations(registrations)))
    }

    /// Create the repository described by the `[repository]` config section.
    pub fn from_settings(
        settings: &RepositorySettings,
    ) -> RepositoryResult<Arc<dyn RegistrationRepository>> {
        let repo_type = RepositoryType::from_str(&settings.repo_type).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Local => match &settings.seed_file {
                Some(path) => Self::create_local_seeded(path),
                None => Ok(Self::create_local()),
            },
        }
    }
}
