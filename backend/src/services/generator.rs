//! Schedule generation on top of the registration store.

use log::info;
use serde::{Deserialize, Serialize};

use crate::db::repository::{RegistrationRepository, RepositoryError};
use crate::models::{ClockTime, Schedule, ScheduleConfig, SectionMetadata};
use crate::scheduler::{self, ScheduleError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Per-run overrides of the configured schedule settings.
///
/// Absent fields keep the configured value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfigPatch {
    #[serde(default)]
    pub start_time: Option<ClockTime>,
    #[serde(default)]
    pub duration_per_item: Option<u32>,
    #[serde(default)]
    pub buffer_between_items: Option<u32>,
    #[serde(default)]
    pub judging_break_duration: Option<u32>,
}

impl ScheduleConfigPatch {
    pub fn apply(&self, base: &ScheduleConfig) -> ScheduleConfig {
        ScheduleConfig {
            start_time: self.start_time.unwrap_or(base.start_time),
            duration_per_item: self.duration_per_item.unwrap_or(base.duration_per_item),
            buffer_between_items: self.buffer_between_items.unwrap_or(base.buffer_between_items),
            judging_break_duration: self
                .judging_break_duration
                .unwrap_or(base.judging_break_duration),
        }
    }
}

/// Snapshot the store and generate the running order from it.
///
/// Each call recomputes from scratch; nothing is cached or persisted.
pub async fn generate_schedule(
    repo: &dyn RegistrationRepository,
    config: &ScheduleConfig,
    metadata: &SectionMetadata,
) -> ServiceResult<Schedule> {
    let snapshot = repo
        .list_registrations()
        .await
        .map_err(|e| e.with_operation("generate_schedule"))?;
    info!("Generating schedule from {} stored registrations", snapshot.len());

    let schedule = scheduler::generate(&snapshot, config, metadata)?;
    Ok(schedule)
}
