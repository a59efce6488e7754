//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::RegistrationRepository;
use crate::models::{ScheduleConfig, SectionMetadata};

/// Shared application state passed to all handlers.
///
/// Read-only after start-up: generation requests override the schedule
/// defaults per call and never write them back.
#[derive(Clone)]
pub struct AppState {
    /// Registration store
    pub repository: Arc<dyn RegistrationRepository>,
    /// Configured schedule settings
    pub schedule_defaults: ScheduleConfig,
    /// Section titles, icons and colors
    pub sections: Arc<SectionMetadata>,
}

impl AppState {
    /// Create application state with built-in schedule defaults.
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self {
            repository,
            schedule_defaults: ScheduleConfig::default(),
            sections: Arc::new(SectionMetadata::default()),
        }
    }

    pub fn with_schedule_defaults(mut self, defaults: ScheduleConfig) -> Self {
        self.schedule_defaults = defaults;
        self
    }

    pub fn with_sections(mut self, sections: SectionMetadata) -> Self {
        self.sections = Arc::new(sections);
        self
    }
}
