//! In-memory local repository implementation.
//!
//! Registrations are kept in submission order; the order matters because it
//! is the final tie-break of the running order.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::{
    ErrorContext, RegistrationRepository, RepositoryError, RepositoryResult,
};
use crate::models::Registration;

/// In-memory local repository.
///
/// # Example
/// ```
/// use festival_schedule::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.registration_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    /// Submission order
    registrations: Vec<Registration>,
    index: HashMap<String, usize>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
            index: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalData {
    fn upsert(&mut self, registration: Registration) {
        match self.index.get(&registration.id) {
            Some(&pos) => self.registrations[pos] = registration,
            None => {
                self.index
                    .insert(registration.id.clone(), self.registrations.len());
                self.registrations.push(registration);
            }
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `registrations`, in order.
    pub fn with_registrations(registrations: impl IntoIterator<Item = Registration>) -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write();
            for registration in registrations {
                data.upsert(registration);
            }
        }
        repo
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.registrations.clear();
        data.index.clear();
    }

    pub fn registration_count(&self) -> usize {
        self.data.read().registrations.len()
    }

    pub fn has_registration(&self, id: &str) -> bool {
        self.data.read().index.contains_key(id)
    }

    fn ensure_healthy(&self, operation: &str) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection("Local repository marked unhealthy")
                .with_operation(operation))
        }
    }
}

#[async_trait]
impl RegistrationRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn store_registration(&self, registration: &Registration) -> RepositoryResult<Registration> {
        self.ensure_healthy("store_registration")?;
        if registration.id.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "Registration id must not be empty",
                ErrorContext::new("store_registration").with_entity("registration"),
            ));
        }
        self.data.write().upsert(registration.clone());
        Ok(registration.clone())
    }

    async fn get_registration(&self, id: &str) -> RepositoryResult<Registration> {
        self.ensure_healthy("get_registration")?;
        let data = self.data.read();
        data.index
            .get(id)
            .map(|&pos| data.registrations[pos].clone())
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Registration {} not found", id),
                    ErrorContext::new("get_registration")
                        .with_entity("registration")
                        .with_entity_id(id),
                )
            })
    }

    async fn list_registrations(&self) -> RepositoryResult<Vec<Registration>> {
        self.ensure_healthy("list_registrations")?;
        Ok(self.data.read().registrations.clone())
    }

    async fn count_registrations(&self) -> RepositoryResult<usize> {
        self.ensure_healthy("count_registrations")?;
        Ok(self.registration_count())
    }
}
