//! Stable digest of a running order's timing.

use sha2::{Digest, Sha256};

use crate::models::ScheduleBlock;

/// SHA-256 over block order and every item's identity and slot.
///
/// Display metadata and the generation timestamp are not part of the
/// digest, so two runs over the same registrations and configuration
/// produce the same fingerprint.
pub fn schedule_fingerprint(blocks: &[ScheduleBlock]) -> String {
    let mut hasher = Sha256::new();
    for block in blocks {
        hasher.update(format!("#{}|{}|{}\n", block.section_key, block.start_time, block.end_time));
        for item in &block.items {
            let start = item.start.map(|t| t.to_string()).unwrap_or_default();
            let end = item.end.map(|t| t.to_string()).unwrap_or_default();
            hasher.update(format!(
                "{}|{}|{}|{}\n",
                item.registration_id, item.piece_name, start, end
            ));
        }
    }
    hex::encode(hasher.finalize())
}
