//! Repository trait for the registration store.
//!
//! The schedule generator only ever reads from the store; writes exist for
//! the HTTP API and for seeding.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::models::Registration;

/// Registration store operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a registration, replacing any existing record with the same id.
    async fn store_registration(&self, registration: &Registration) -> RepositoryResult<Registration>;

    /// Fetch a single registration.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no registration has this id
    async fn get_registration(&self, id: &str) -> RepositoryResult<Registration>;

    /// All registrations in submission order.
    async fn list_registrations(&self) -> RepositoryResult<Vec<Registration>>;

    /// Confirmed/paid registrations in submission order.
    async fn list_confirmed_registrations(&self) -> RepositoryResult<Vec<Registration>> {
        Ok(self
            .list_registrations()
            .await?
            .into_iter()
            .filter(|r| r.is_eligible())
            .collect())
    }

    async fn count_registrations(&self) -> RepositoryResult<usize> {
        Ok(self.list_registrations().await?.len())
    }
}
