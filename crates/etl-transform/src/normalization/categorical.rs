//! Gender and region canonicalization.

use serde::{Deserialize, Serialize};

use super::text::title_case;

/// What to do with a gender value outside the known vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderFallback {
    /// Keep the value as-is so later review can see the original.
    #[default]
    PassThrough,
    /// Collapse unrecognized values to `Other`.
    Other,
}

/// Canonical region names keyed by their lowercase form.
pub const REGIONS: [(&str, &str); 5] = [
    ("northeast", "Northeast"),
    ("southeast", "Southeast"),
    ("midwest", "Midwest"),
    ("southwest", "Southwest"),
    ("west", "West"),
];

fn canonical_gender(key: &str) -> Option<&'static str> {
    match key {
        "m" | "male" | "man" => Some("M"),
        "f" | "female" | "woman" => Some("F"),
        "other" | "nonbinary" | "nb" => Some("Other"),
        _ => None,
    }
}

/// Map a gender value to `M`, `F`, or `Other`.
pub fn normalize_gender(value: &str, fallback: GenderFallback) -> String {
    let key = value.trim().to_lowercase();
    match (canonical_gender(&key), fallback) {
        (Some(canonical), _) => canonical.to_string(),
        (None, GenderFallback::Other) => "Other".to_string(),
        (None, GenderFallback::PassThrough) => value.to_string(),
    }
}

/// Map a region to its canonical name, or title-case it.
pub fn normalize_region(value: &str) -> String {
    let trimmed = value.trim();
    let key = trimmed.to_lowercase();
    REGIONS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| title_case(trimmed))
}
