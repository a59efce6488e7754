//! Bucketing by section and age ordering within a section.

use std::collections::BTreeMap;

use crate::models::{ScheduleItem, SectionKey};

/// Items bucketed by section, each bucket in performance order.
pub type SectionBuckets = BTreeMap<SectionKey, Vec<ScheduleItem>>;

/// Extract the age from a category label such as `"8 - 10 ani"`.
///
/// Returns the first run of ASCII digits as a number, or `0` when the
/// label has no digits (or the number does not fit a `u32`).
pub fn parse_category_age(category: &str) -> u32 {
    let digits: String = category
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Exact age when known, otherwise the category-derived age.
pub fn resolved_age(item: &ScheduleItem) -> u32 {
    item.exact_age
        .unwrap_or_else(|| parse_category_age(&item.age_category))
}

/// Bucket items by section key and sort every bucket by age.
pub fn group(items: Vec<ScheduleItem>) -> SectionBuckets {
    let mut buckets = SectionBuckets::new();
    for item in items {
        buckets.entry(item.section_key).or_default().push(item);
    }
    for bucket in buckets.values_mut() {
        sort_by_age(bucket);
    }
    buckets
}

/// Stable ascending sort on resolved age; ties keep their input order.
///
/// One key per item keeps the ordering total, even when items with and
/// without an exact age share a section.
pub fn sort_by_age(items: &mut [ScheduleItem]) {
    items.sort_by_key(resolved_age);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistrationKind;

    fn item(id: &str, section_key: SectionKey, category: &str, exact_age: Option<u32>) -> ScheduleItem {
        ScheduleItem {
            position: None,
            registration_id: id.to_string(),
            participant_name: id.to_string(),
            piece_name: format!("{} piece", id),
            artist: String::new(),
            section_key,
            age_category: category.to_string(),
            exact_age,
            teacher_or_coordinator: String::new(),
            institution: String::new(),
            kind: RegistrationKind::Individual,
            start: None,
            end: None,
        }
    }

    fn ids(items: &[ScheduleItem]) -> Vec<&str> {
        items.iter().map(|i| i.registration_id.as_str()).collect()
    }

    #[test]
    fn test_parse_category_age() {
        assert_eq!(parse_category_age("8 - 10 ani"), 8);
        assert_eq!(parse_category_age("Categoria 14-16"), 14);
        assert_eq!(parse_category_age("peste 18 ani"), 18);
        assert_eq!(parse_category_age("adulți"), 0);
        assert_eq!(parse_category_age(""), 0);
        assert_eq!(parse_category_age("99999999999999 ani"), 0);
    }

    #[test]
    fn test_group_buckets_by_section() {
        let buckets = group(vec![
            item("a", SectionKey::Ro, "", Some(6)),
            item("b", SectionKey::Intl, "", Some(9)),
            item("c", SectionKey::Ro, "", Some(8)),
        ]);
        assert_eq!(buckets.len(), 2);
        assert_eq!(ids(&buckets[&SectionKey::Ro]), vec!["a", "c"]);
        assert_eq!(ids(&buckets[&SectionKey::Intl]), vec!["b"]);
    }

    #[test]
    fn test_sort_prefers_exact_age() {
        let mut items = vec![
            item("old", SectionKey::Ro, "5 - 7 ani", Some(12)),
            item("young", SectionKey::Ro, "11 - 13 ani", Some(6)),
        ];
        sort_by_age(&mut items);
        assert_eq!(ids(&items), vec!["young", "old"]);
    }

    #[test]
    fn test_sort_falls_back_to_category() {
        let mut items = vec![
            item("teen", SectionKey::Group, "14 - 16 ani", None),
            item("kid", SectionKey::Group, "8 - 10 ani", None),
            item("unknown", SectionKey::Group, "mixt", None),
        ];
        sort_by_age(&mut items);
        assert_eq!(ids(&items), vec!["unknown", "kid", "teen"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut items = vec![
            item("first", SectionKey::Pop, "8 - 10 ani", None),
            item("second", SectionKey::Pop, "8 - 10 ani", Some(8)),
            item("third", SectionKey::Pop, "8 ani", None),
        ];
        sort_by_age(&mut items);
        assert_eq!(ids(&items), vec!["first", "second", "third"]);
    }
}
