//! Festival running-order generator.
//!
//! Turns confirmed registrations into a time-ordered schedule of themed
//! blocks. The pipeline is pure and deterministic:
//!
//! ```text
//! registrations ─▶ flatten ─▶ group & sort ─▶ allocate ─▶ assemble ─▶ Schedule
//!                  (classify)
//! ```
//!
//! Each stage lives in its own module and can be used on its own; [`generate`]
//! runs them all.

pub mod allocator;
pub mod assembler;
pub mod classifier;
pub mod error;
pub mod fingerprint;
pub mod flatten;
pub mod grouping;

pub use allocator::allocate;
pub use assembler::{assemble, build_schedule};
pub use classifier::classify;
pub use error::{ScheduleError, ScheduleResult};
pub use flatten::flatten;
pub use grouping::{group, parse_category_age, resolved_age, SectionBuckets};

use log::{info, warn};

use crate::models::{Registration, Schedule, ScheduleConfig, SectionKey, SectionMetadata};

/// Generate the running order for the given registration snapshot.
///
/// Only confirmed/paid registrations are scheduled. Fails with
/// [`ScheduleError::NoConfirmedRegistrations`] when nothing is eligible.
pub fn generate(
    registrations: &[Registration],
    config: &ScheduleConfig,
    metadata: &SectionMetadata,
) -> ScheduleResult<Schedule> {
    generate_at(registrations, config, metadata, chrono::Utc::now())
}

/// [`generate`] with an explicit display timestamp.
pub fn generate_at(
    registrations: &[Registration],
    config: &ScheduleConfig,
    metadata: &SectionMetadata,
    generated_at: chrono::DateTime<chrono::Utc>,
) -> ScheduleResult<Schedule> {
    config.validate()?;

    let eligible = registrations.iter().filter(|r| r.is_eligible()).count();
    if eligible == 0 {
        return Err(ScheduleError::NoConfirmedRegistrations);
    }

    let items = flatten(registrations);
    info!(
        "Generating schedule: {} eligible of {} registrations, {} pieces",
        eligible,
        registrations.len(),
        items.len()
    );

    let buckets = group(items);
    let blocks = allocate(
        buckets,
        &SectionKey::PRIORITY,
        config.start_time,
        config.duration_per_item,
        config.buffer_between_items,
    );
    let blocks = assemble(blocks, metadata);

    // Eligible registrations without pieces leave nothing to schedule.
    let schedule = build_schedule(blocks, config, generated_at)
        .ok_or(ScheduleError::NoConfirmedRegistrations)?;

    if schedule.summary.runs_past_midnight {
        warn!(
            "Schedule starting at {} runs past midnight (ends {})",
            schedule.summary.first_start, schedule.summary.last_end
        );
    }
    info!(
        "Generated {} blocks, {} items, {} - {}",
        schedule.summary.total_blocks,
        schedule.summary.total_items,
        schedule.summary.first_start,
        schedule.summary.last_end
    );

    Ok(schedule)
}
