//! Thin service functions over the registration store.

use crate::db::repository::{RegistrationRepository, RepositoryResult};
use crate::models::Registration;

pub async fn health_check(repo: &dyn RegistrationRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

pub async fn list_registrations(repo: &dyn RegistrationRepository) -> RepositoryResult<Vec<Registration>> {
    repo.list_registrations().await
}

pub async fn get_registration(
    repo: &dyn RegistrationRepository,
    id: &str,
) -> RepositoryResult<Registration> {
    repo.get_registration(id).await
}

/// Store a registration, trimming surrounding whitespace from its id.
pub async fn store_registration(
    repo: &dyn RegistrationRepository,
    registration: Registration,
) -> RepositoryResult<Registration> {
    let mut registration = registration;
    registration.id = registration.id.trim().to_string();
    repo.store_registration(&registration).await
}
