//! Label model for categorising events.
//!
//! Labels form a closed set. Each label has a stable identifier (stored on
//! events and in the filter state) and a display name shown to the user.
//! Colors are a presentation concern and live in `ui_egui::palette`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed event labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Indigo,
    Gray,
    Green,
    Blue,
    Red,
    Purple,
}

/// Display metadata for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelInfo {
    pub label: Label,
    pub identifier: &'static str,
    pub display_name: &'static str,
}

/// The fixed label table, in display order. The first entry is the default
/// label for new events.
pub static LABELS: [LabelInfo; 6] = [
    LabelInfo { label: Label::Indigo, identifier: "indigo", display_name: "Work" },
    LabelInfo { label: Label::Gray, identifier: "gray", display_name: "Personal" },
    LabelInfo { label: Label::Green, identifier: "green", display_name: "Health" },
    LabelInfo { label: Label::Blue, identifier: "blue", display_name: "Leisure" },
    LabelInfo { label: Label::Red, identifier: "red", display_name: "Urgent" },
    LabelInfo { label: Label::Purple, identifier: "purple", display_name: "Social" },
];

impl Label {
    /// All labels in display order.
    pub const ALL: [Label; 6] = [
        Label::Indigo,
        Label::Gray,
        Label::Green,
        Label::Blue,
        Label::Red,
        Label::Purple,
    ];

    /// Label preselected for new events.
    pub fn first() -> Self {
        LABELS[0].label
    }

    pub fn info(&self) -> &'static LabelInfo {
        // LABELS is indexed in the same order as the enum
        &LABELS[*self as usize]
    }

    /// Stable identifier stored on events (e.g. "indigo")
    pub fn identifier(&self) -> &'static str {
        self.info().identifier
    }

    /// Human readable name (e.g. "Work")
    pub fn display_name(&self) -> &'static str {
        self.info().display_name
    }

    /// Resolve a stored identifier against the fixed set.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        LABELS
            .iter()
            .find(|info| info.identifier == identifier)
            .map(|info| info.label)
    }

    /// Resolve a display name (case-insensitive), e.g. "work".
    pub fn from_display_name(name: &str) -> Option<Self> {
        LABELS
            .iter()
            .find(|info| info.display_name.eq_ignore_ascii_case(name.trim()))
            .map(|info| info.label)
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Error for identifiers outside the fixed label set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown label identifier '{0}'")]
pub struct LabelParseError(pub String);

impl FromStr for Label {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s.trim()).ok_or_else(|| LabelParseError(s.to_string()))
    }
}

/// Filter state for a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilterEntry {
    pub name: Label,
    pub enabled: bool,
}

impl LabelFilterEntry {
    pub fn new(name: Label, enabled: bool) -> Self {
        Self { name, enabled }
    }
}

/// Filter entries for the whole fixed set, all enabled.
pub fn default_filters() -> Vec<LabelFilterEntry> {
    Label::ALL
        .iter()
        .map(|label| LabelFilterEntry::new(*label, true))
        .collect()
}
