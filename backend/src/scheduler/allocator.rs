//! Time slot allocation over the fixed section order.

use log::debug;

use super::grouping::SectionBuckets;
use crate::models::{ClockTime, ScheduleBlock, SectionKey};

/// Assign `[start, end)` slots to every bucketed item.
///
/// Sections are visited in `section_order`; empty or absent sections yield
/// no block. Each item occupies `duration_per_item` minutes and is followed
/// by `buffer` minutes before the next one, across block boundaries too.
/// A block ends at its last item's end, without the trailing buffer.
///
/// Times wrap past midnight. Blocks carry the bare section key as title
/// until the assembler decorates them.
pub fn allocate(
    mut buckets: SectionBuckets,
    section_order: &[SectionKey],
    start: ClockTime,
    duration_per_item: u32,
    buffer: u32,
) -> Vec<ScheduleBlock> {
    let step = duration_per_item.saturating_add(buffer);
    let mut current_time = start;
    let mut blocks = Vec::new();

    for section_key in section_order {
        let Some(mut items) = buckets.remove(section_key) else {
            continue;
        };
        if items.is_empty() {
            continue;
        }

        let block_start = current_time;
        for item in items.iter_mut() {
            item.start = Some(current_time);
            item.end = Some(current_time.add_minutes(duration_per_item));
            current_time = current_time.add_minutes(step);
        }
        let block_end = current_time.sub_minutes(buffer);

        debug!(
            "Allocated {} block: {} items, {} - {}",
            section_key,
            items.len(),
            block_start,
            block_end
        );

        blocks.push(ScheduleBlock {
            section_key: *section_key,
            title: section_key.as_str().to_string(),
            icon: String::new(),
            color: String::new(),
            start_time: block_start,
            end_time: block_end,
            items,
        });
    }

    blocks
}
