//! Decoration of allocated blocks into the printable running order.

use std::collections::HashSet;

use super::fingerprint::schedule_fingerprint;
use crate::models::{
    JudgingBreak, Schedule, ScheduleBlock, ScheduleConfig, ScheduleSummary, SectionCount,
    SectionMetadata,
};

/// Title of the jury deliberation block.
pub const JUDGING_BREAK_TITLE: &str = "Deliberarea juriului";

/// Attach section display metadata and number the items 1..n.
///
/// Purely additive: timing and order are left as allocated.
pub fn assemble(mut blocks: Vec<ScheduleBlock>, metadata: &SectionMetadata) -> Vec<ScheduleBlock> {
    let mut position = 0;
    for block in blocks.iter_mut() {
        let display = metadata.get(block.section_key);
        block.title = display.title;
        block.icon = display.icon;
        block.color = display.color;

        for item in block.items.iter_mut() {
            position += 1;
            item.position = Some(position);
        }
    }
    blocks
}

/// The jury break, placed right after the last block. `None` when the
/// configured duration is zero or there are no blocks.
pub fn judging_break(blocks: &[ScheduleBlock], config: &ScheduleConfig) -> Option<JudgingBreak> {
    if config.judging_break_duration == 0 {
        return None;
    }
    let last = blocks.last()?;
    Some(JudgingBreak {
        title: JUDGING_BREAK_TITLE.to_string(),
        duration_minutes: config.judging_break_duration,
        start_time: last.end_time,
        end_time: last.end_time.add_minutes(config.judging_break_duration),
    })
}

/// Totals for the header of the printed schedule.
///
/// Returns `None` for an empty block list.
pub fn summarize(blocks: &[ScheduleBlock], config: &ScheduleConfig) -> Option<ScheduleSummary> {
    let first = blocks.first()?;
    let last = blocks.last()?;

    let total_items: usize = blocks.iter().map(|b| b.items.len()).sum();
    let total_registrations = blocks
        .iter()
        .flat_map(|b| b.items.iter())
        .map(|i| i.registration_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    // Slots are contiguous across blocks: n slots and n - 1 buffers.
    let step = config
        .duration_per_item
        .saturating_add(config.buffer_between_items);
    let elapsed_minutes = (total_items as u32)
        .saturating_mul(step)
        .saturating_sub(config.buffer_between_items);
    let runs_past_midnight = u64::from(first.start_time.minutes_since_midnight())
        + u64::from(elapsed_minutes)
        >= u64::from(crate::models::MINUTES_PER_DAY);

    Some(ScheduleSummary {
        total_items,
        total_registrations,
        total_blocks: blocks.len(),
        first_start: first.start_time,
        last_end: last.end_time,
        elapsed_minutes,
        runs_past_midnight,
        sections: blocks
            .iter()
            .map(|b| SectionCount {
                section_key: b.section_key,
                items: b.items.len(),
            })
            .collect(),
    })
}

/// Package decorated blocks into a [`Schedule`].
///
/// Returns `None` for an empty block list.
pub fn build_schedule(
    blocks: Vec<ScheduleBlock>,
    config: &ScheduleConfig,
    generated_at: chrono::DateTime<chrono::Utc>,
) -> Option<Schedule> {
    let summary = summarize(&blocks, config)?;
    let judging_break = judging_break(&blocks, config);
    let fingerprint = schedule_fingerprint(&blocks);

    Some(Schedule {
        generated_at,
        config: *config,
        blocks,
        judging_break,
        summary,
        fingerprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, RegistrationKind, ScheduleItem, SectionKey};

    fn at(hour: u32, minute: u32) -> ClockTime {
        ClockTime::from_hm(hour, minute).unwrap()
    }

    fn item(id: &str, section_key: SectionKey, start: ClockTime) -> ScheduleItem {
        ScheduleItem {
            position: None,
            registration_id: id.to_string(),
            participant_name: id.to_string(),
            piece_name: id.to_string(),
            artist: String::new(),
            section_key,
            age_category: String::new(),
            exact_age: None,
            teacher_or_coordinator: String::new(),
            institution: String::new(),
            kind: RegistrationKind::Individual,
            start: Some(start),
            end: Some(start.add_minutes(4)),
        }
    }

    fn sample_blocks() -> Vec<ScheduleBlock> {
        vec![
            ScheduleBlock {
                section_key: SectionKey::Ro,
                title: "RO".to_string(),
                icon: String::new(),
                color: String::new(),
                start_time: at(10, 0),
                end_time: at(10, 9),
                items: vec![item("a", SectionKey::Ro, at(10, 0)), item("a", SectionKey::Ro, at(10, 5))],
            },
            ScheduleBlock {
                section_key: SectionKey::Intl,
                title: "INTL".to_string(),
                icon: String::new(),
                color: String::new(),
                start_time: at(10, 10),
                end_time: at(10, 14),
                items: vec![item("b", SectionKey::Intl, at(10, 10))],
            },
        ]
    }

    #[test]
    fn test_assemble_decorates_and_numbers() {
        let metadata = SectionMetadata::default();
        let blocks = assemble(sample_blocks(), &metadata);

        assert_eq!(blocks[0].title, metadata.get(SectionKey::Ro).title);
        assert_eq!(blocks[0].color, "ro");
        assert_eq!(blocks[1].icon, metadata.get(SectionKey::Intl).icon);

        let positions: Vec<_> = blocks
            .iter()
            .flat_map(|b| b.items.iter())
            .map(|i| i.position)
            .collect();
        assert_eq!(positions, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_assemble_leaves_timing_alone() {
        let before = sample_blocks();
        let after = assemble(before.clone(), &SectionMetadata::default());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b.start_time, a.start_time);
            assert_eq!(b.end_time, a.end_time);
            assert_eq!(b.section_key, a.section_key);
        }
    }

    #[test]
    fn test_judging_break_follows_last_block() {
        let config = ScheduleConfig::default();
        let jb = judging_break(&sample_blocks(), &config).unwrap();
        assert_eq!(jb.start_time, at(10, 14));
        assert_eq!(jb.end_time, at(10, 44));
        assert_eq!(jb.duration_minutes, 30);
    }

    #[test]
    fn test_no_judging_break_when_zero() {
        let config = ScheduleConfig {
            judging_break_duration: 0,
            ..Default::default()
        };
        assert!(judging_break(&sample_blocks(), &config).is_none());
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&sample_blocks(), &ScheduleConfig::default()).unwrap();
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_registrations, 2);
        assert_eq!(summary.total_blocks, 2);
        assert_eq!(summary.first_start, at(10, 0));
        assert_eq!(summary.last_end, at(10, 14));
        assert_eq!(summary.elapsed_minutes, 14);
        assert!(!summary.runs_past_midnight);
        assert_eq!(summary.sections[0].items, 2);
    }

    #[test]
    fn test_empty_blocks_build_nothing() {
        assert!(build_schedule(vec![], &ScheduleConfig::default(), chrono::Utc::now()).is_none());
    }
}
