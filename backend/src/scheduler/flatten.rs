//! Expansion of registrations into one schedule item per piece.

use log::warn;

use super::classifier::classify;
use crate::models::{Registration, ScheduleItem, SectionKey};

/// Emit one unscheduled item per piece of every eligible registration.
///
/// Registration order and piece order are preserved; that order is the
/// tie-break for the age sort. Ineligible registrations are skipped.
pub fn flatten(registrations: &[Registration]) -> Vec<ScheduleItem> {
    registrations
        .iter()
        .filter(|r| r.is_eligible())
        .flat_map(|registration| {
            registration
                .pieces
                .iter()
                .map(move |piece| {
                    let section_key = classify(&piece.section_label, registration.kind);
                    if section_key == SectionKey::Other {
                        warn!(
                            "Registration {}: section label '{}' matched no section, using OTHER",
                            registration.id, piece.section_label
                        );
                    }
                    ScheduleItem {
                        position: None,
                        registration_id: registration.id.clone(),
                        participant_name: registration.participant_name.clone(),
                        piece_name: piece.name.clone(),
                        artist: piece.artist.clone(),
                        section_key,
                        age_category: registration.age_category.clone(),
                        exact_age: registration.exact_age,
                        teacher_or_coordinator: registration.teacher_or_coordinator.clone(),
                        institution: registration.institution.clone(),
                        kind: registration.kind,
                        start: None,
                        end: None,
                    }
                })
        })
        .collect()
}
