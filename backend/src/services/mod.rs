//! Service layer between the registration store and its callers.
//!
//! Services take a snapshot from the repository and hand it to the pure
//! scheduler; they hold no state of their own.

pub mod generator;
pub mod registrations;

pub use generator::{generate_schedule, ScheduleConfigPatch, ServiceError, ServiceResult};
pub use registrations::{get_registration, health_check, list_registrations, store_registration};
