use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical festival section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionKey {
    /// Romanian light music
    Ro,
    /// International light music
    Intl,
    /// Folk music
    Pop,
    Etno,
    /// Carols
    Carol,
    /// Instrumental
    Instr,
    /// Group performances, whatever the piece label says
    Group,
    Other,
}

impl SectionKey {
    /// Fixed order in which sections are laid out on the running order.
    pub const PRIORITY: [SectionKey; 8] = [
        SectionKey::Ro,
        SectionKey::Intl,
        SectionKey::Pop,
        SectionKey::Etno,
        SectionKey::Carol,
        SectionKey::Instr,
        SectionKey::Group,
        SectionKey::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Ro => "RO",
            SectionKey::Intl => "INTL",
            SectionKey::Pop => "POP",
            SectionKey::Etno => "ETNO",
            SectionKey::Carol => "CAROL",
            SectionKey::Instr => "INSTR",
            SectionKey::Group => "GROUP",
            SectionKey::Other => "OTHER",
        }
    }

    /// Index into [`SectionKey::PRIORITY`].
    pub fn priority(&self) -> usize {
        match self {
            SectionKey::Ro => 0,
            SectionKey::Intl => 1,
            SectionKey::Pop => 2,
            SectionKey::Etno => 3,
            SectionKey::Carol => 4,
            SectionKey::Instr => 5,
            SectionKey::Group => 6,
            SectionKey::Other => 7,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::PRIORITY
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown section key: {}", s))
    }
}

/// Display metadata attached to a block by the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDisplay {
    pub title: String,
    pub icon: String,
    /// Color class consumed by the print stylesheet
    pub color: String,
}

impl SectionDisplay {
    fn new(title: &str, icon: &str, color: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }
}

/// Partial override of a section's display metadata, as read from config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDisplayOverride {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Display metadata for every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMetadata {
    entries: BTreeMap<SectionKey, SectionDisplay>,
}

impl SectionMetadata {
    /// Look up the display metadata for `key`.
    pub fn get(&self, key: SectionKey) -> SectionDisplay {
        self.entries
            .get(&key)
            .cloned()
            .unwrap_or_else(|| SectionDisplay::new(key.as_str(), "", "other"))
    }

    /// Apply per-section overrides; absent fields keep their current value.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a SectionKey, &'a SectionDisplayOverride)>,
    {
        for (key, patch) in overrides {
            let entry = self.entries.entry(*key).or_insert_with(|| {
                SectionDisplay::new(key.as_str(), "", "other")
            });
            if let Some(title) = &patch.title {
                entry.title = title.clone();
            }
            if let Some(icon) = &patch.icon {
                entry.icon = icon.clone();
            }
            if let Some(color) = &patch.color {
                entry.color = color.clone();
            }
        }
        self
    }
}

impl Default for SectionMetadata {
    fn default() -> Self {
        let entries = [
            (SectionKey::Ro, SectionDisplay::new("Muzică Ușoară Românească", "🎤", "ro")),
            (SectionKey::Intl, SectionDisplay::new("Muzică Ușoară Internațională", "🌍", "intl")),
            (SectionKey::Pop, SectionDisplay::new("Muzică Populară", "🪕", "pop")),
            (SectionKey::Etno, SectionDisplay::new("Etno", "🌾", "etno")),
            (SectionKey::Carol, SectionDisplay::new("Colinde", "🔔", "carol")),
            (SectionKey::Instr, SectionDisplay::new("Instrumental", "🎻", "instr")),
            (SectionKey::Group, SectionDisplay::new("Grupuri", "👥", "group")),
            (SectionKey::Other, SectionDisplay::new("Alte Secțiuni", "🎵", "other")),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}
