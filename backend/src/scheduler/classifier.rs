//! Section classification of free-text piece labels.

use crate::models::{RegistrationKind, SectionKey};

/// Keyword rules, checked in order; the first keyword found in the label wins.
///
/// Keywords are lowercase with comma-below diacritics.
pub const SECTION_RULES: &[(&str, SectionKey)] = &[
    ("românească", SectionKey::Ro),
    ("internațională", SectionKey::Intl),
    ("populară", SectionKey::Pop),
    ("etno", SectionKey::Etno),
    ("colinde", SectionKey::Carol),
    ("instrument", SectionKey::Instr),
];

/// Map a piece's section label to its canonical section.
///
/// Group registrations always land in [`SectionKey::Group`] so a group's
/// pieces are never split across sections. Labels matching no rule map to
/// [`SectionKey::Other`].
pub fn classify(section_label: &str, kind: RegistrationKind) -> SectionKey {
    if kind == RegistrationKind::Group {
        return SectionKey::Group;
    }

    let label = normalize_label(section_label);
    SECTION_RULES
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, key)| *key)
        .unwrap_or(SectionKey::Other)
}

/// Lowercase and fold legacy cedilla letters (ş, ţ) into comma-below (ș, ț).
fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ş' => 'ș',
            'ţ' => 'ț',
            other => other,
        })
        .collect()
}
