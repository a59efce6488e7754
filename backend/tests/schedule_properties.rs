//! Property tests for the generated running order.

use std::collections::HashMap;

use chrono::TimeZone;
use festival_schedule::models::{
    ClockTime, Piece, Registration, RegistrationKind, RegistrationStatus, ScheduleConfig,
    SectionKey, SectionMetadata,
};
use festival_schedule::scheduler::{self, resolved_age, ScheduleError};
use proptest::prelude::*;

const LABELS: &[&str] = &[
    "Muzică ușoară românească",
    "Muzica usoara internaţională",
    "MUZICĂ POPULARĂ",
    "Etno",
    "Colinde",
    "Instrumental - vioară",
    "Muzică de film",
    "",
];

const CATEGORIES: &[&str] = &["", "5 - 7 ani", "8-10 ani", "Grupa 14 - 16 ani", "Adulți"];

fn kind_strategy() -> impl Strategy<Value = RegistrationKind> {
    prop_oneof![Just(RegistrationKind::Individual), Just(RegistrationKind::Group)]
}

fn status_strategy() -> impl Strategy<Value = RegistrationStatus> {
    prop_oneof![
        Just(RegistrationStatus::Pending),
        Just(RegistrationStatus::Confirmed),
        Just(RegistrationStatus::Paid),
        Just(RegistrationStatus::Cancelled),
    ]
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (prop::sample::select(LABELS), "[a-z]{1,8}").prop_map(|(label, name)| Piece {
        name,
        artist: String::new(),
        section_label: label.to_string(),
    })
}

fn registrations_strategy() -> impl Strategy<Value = Vec<Registration>> {
    let registration = (
        kind_strategy(),
        status_strategy(),
        prop::option::of(4u32..25),
        prop::sample::select(CATEGORIES),
        prop::collection::vec(piece_strategy(), 0..4),
    );
    prop::collection::vec(registration, 0..16).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (kind, status, exact_age, category, pieces))| Registration {
                id: format!("r{}", i),
                kind,
                participant_name: format!("P{}", i),
                age_category: category.to_string(),
                exact_age,
                teacher_or_coordinator: String::new(),
                institution: String::new(),
                pieces,
                status,
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = ScheduleConfig> {
    (0u32..24, 0u32..60, 1u32..15, 0u32..6, 0u32..60).prop_map(
        |(hour, minute, duration, buffer, jury)| ScheduleConfig {
            start_time: ClockTime::from_hm(hour, minute).unwrap(),
            duration_per_item: duration,
            buffer_between_items: buffer,
            judging_break_duration: jury,
        },
    )
}

fn expected_pieces(registrations: &[Registration]) -> HashMap<(String, String), usize> {
    let mut counts = HashMap::new();
    for reg in registrations.iter().filter(|r| r.is_eligible()) {
        for piece in &reg.pieces {
            *counts.entry((reg.id.clone(), piece.name.clone())).or_insert(0) += 1;
        }
    }
    counts
}

proptest! {
    #[test]
    fn prop_running_order_invariants(
        registrations in registrations_strategy(),
        config in config_strategy(),
    ) {
        let expected = expected_pieces(&registrations);
        let result = scheduler::generate(&registrations, &config, &SectionMetadata::default());

        if expected.is_empty() {
            prop_assert_eq!(result.unwrap_err(), ScheduleError::NoConfirmedRegistrations);
            return Ok(());
        }
        let schedule = result.unwrap();

        // Every eligible piece appears exactly once, nothing else does.
        let mut seen = HashMap::new();
        for item in schedule.items() {
            *seen.entry((item.registration_id.clone(), item.piece_name.clone())).or_insert(0) += 1;
        }
        prop_assert_eq!(&seen, &expected);

        // Slots are contiguous from the start time.
        let step = config.duration_per_item + config.buffer_between_items;
        for (k, item) in schedule.items().enumerate() {
            let start = config.start_time.add_minutes(k as u32 * step);
            prop_assert_eq!(item.start, Some(start));
            prop_assert_eq!(item.end, Some(start.add_minutes(config.duration_per_item)));
            prop_assert_eq!(item.position, Some(k + 1));
        }

        let kinds: HashMap<&str, RegistrationKind> =
            registrations.iter().map(|r| (r.id.as_str(), r.kind)).collect();
        let mut last_priority = None;
        for block in &schedule.blocks {
            prop_assert!(!block.items.is_empty());

            // Fixed section order, each section at most once.
            let priority = block.section_key.priority();
            prop_assert!(last_priority.map_or(true, |p| p < priority));
            last_priority = Some(priority);

            prop_assert_eq!(block.start_time, block.items[0].start.unwrap());
            prop_assert_eq!(block.end_time, block.items[block.items.len() - 1].end.unwrap());

            // Youngest first within a section.
            for pair in block.items.windows(2) {
                prop_assert!(resolved_age(&pair[0]) <= resolved_age(&pair[1]));
            }

            for item in &block.items {
                prop_assert_eq!(item.section_key, block.section_key);
                let is_group = kinds[item.registration_id.as_str()] == RegistrationKind::Group;
                prop_assert_eq!(is_group, block.section_key == SectionKey::Group);
            }
        }

        let total = schedule.summary.total_items as u32;
        prop_assert_eq!(schedule.summary.elapsed_minutes, total * step - config.buffer_between_items);
        prop_assert_eq!(
            schedule.summary.last_end,
            config.start_time.add_minutes(schedule.summary.elapsed_minutes)
        );
        prop_assert_eq!(
            schedule.judging_break.is_some(),
            config.judging_break_duration > 0
        );
    }

    #[test]
    fn prop_generation_is_deterministic(
        registrations in registrations_strategy(),
        config in config_strategy(),
    ) {
        let at = chrono::Utc.with_ymd_and_hms(2025, 12, 6, 9, 0, 0).unwrap();
        let metadata = SectionMetadata::default();
        let first = scheduler::generate_at(&registrations, &config, &metadata, at);
        let second = scheduler::generate_at(&registrations, &config, &metadata, at);

        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            ),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "outcomes differ between runs"),
        }
    }
}
