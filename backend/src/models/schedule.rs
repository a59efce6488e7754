// ============================================================================
// Running order ("desfășurător") types
// ============================================================================
//
// Everything here is produced fresh by each generation run and never
// persisted. Field names are the contract with the print renderer.

use serde::{Deserialize, Serialize};

use super::registration::RegistrationKind;
use super::section::SectionKey;
use super::time::{ClockTime, MINUTES_PER_DAY};
use crate::scheduler::ScheduleError;

/// Operator-supplied settings for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub start_time: ClockTime,
    /// Minutes on stage per piece, must be positive
    pub duration_per_item: u32,
    /// Gap in minutes between consecutive pieces
    pub buffer_between_items: u32,
    /// Shown as a separate block; the allocator ignores it
    pub judging_break_duration: u32,
}

impl ScheduleConfig {
    /// Durations are bounded by one day so slot arithmetic cannot overflow.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.duration_per_item == 0 {
            return Err(ScheduleError::InvalidConfig {
                field: "durationPerItem",
                message: "must be a positive number of minutes".to_string(),
            });
        }
        let bounded = [
            ("durationPerItem", self.duration_per_item),
            ("bufferBetweenItems", self.buffer_between_items),
            ("judgingBreakDuration", self.judging_break_duration),
        ];
        for (field, minutes) in bounded {
            if minutes > MINUTES_PER_DAY {
                return Err(ScheduleError::InvalidConfig {
                    field,
                    message: format!("must be at most {} minutes", MINUTES_PER_DAY),
                });
            }
        }
        if self.duration_per_item + self.buffer_between_items > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidConfig {
                field: "bufferBetweenItems",
                message: format!(
                    "duration plus buffer must be at most {} minutes",
                    MINUTES_PER_DAY
                ),
            });
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_time: ClockTime::from(
                chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(chrono::NaiveTime::MIN),
            ),
            duration_per_item: 4,
            buffer_between_items: 1,
            judging_break_duration: 30,
        }
    }
}

/// One piece on the running order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// 1-based running number across the whole schedule, set on assembly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub registration_id: String,
    pub participant_name: String,
    pub piece_name: String,
    pub artist: String,
    pub section_key: SectionKey,
    pub age_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_age: Option<u32>,
    pub teacher_or_coordinator: String,
    pub institution: String,
    pub kind: RegistrationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<ClockTime>,
}

/// A contiguous run of items belonging to one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    pub section_key: SectionKey,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub start_time: ClockTime,
    /// End of the last item (trailing buffer excluded)
    pub end_time: ClockTime,
    pub items: Vec<ScheduleItem>,
}

/// Fixed display block for the jury deliberation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgingBreak {
    pub title: String,
    pub duration_minutes: u32,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCount {
    pub section_key: SectionKey,
    pub items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_items: usize,
    pub total_registrations: usize,
    pub total_blocks: usize,
    pub first_start: ClockTime,
    pub last_end: ClockTime,
    /// Minutes from the first start to the last end
    pub elapsed_minutes: u32,
    pub runs_past_midnight: bool,
    pub sections: Vec<SectionCount>,
}

/// The assembled running order handed to the print renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Display-only timestamp
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub config: ScheduleConfig,
    pub blocks: Vec<ScheduleBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judging_break: Option<JudgingBreak>,
    pub summary: ScheduleSummary,
    /// SHA-256 over block order and item timings
    pub fingerprint: String,
}

impl Schedule {
    /// All items in performance order.
    pub fn items(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.blocks.iter().flat_map(|b| b.items.iter())
    }
}
