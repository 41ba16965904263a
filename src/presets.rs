//! Preset library — named modifier bundles applied atomically
//!
//! Each preset is a fixed [`ModifierSet`] value, data rather than code
//! branches, so new archetypes can be added without touching calculator
//! logic. Applying a preset replaces the whole active modifier set — never
//! a field-by-field merge.

use serde::Serialize;

use crate::types::ModifierSet;

/// A named, immutable modifier bundle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    /// Stable identifier used by the API and interaction layer
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub modifiers: ModifierSet,
}

/// The built-in scenario archetypes.
pub const PRESETS: [Preset; 4] = [
    Preset {
        id: "steady",
        name: "Steady Climb",
        modifiers: ModifierSet::new(30.0, 10.0, 5.0, 5.0, 5.0),
    },
    Preset {
        id: "rocket",
        name: "Rocket Ship",
        modifiers: ModifierSet::new(100.0, -10.0, 0.0, 0.0, -10.0),
    },
    Preset {
        id: "profit",
        name: "Profit Squeeze",
        modifiers: ModifierSet::new(10.0, 30.0, 10.0, 15.0, 15.0),
    },
    Preset {
        id: "pivot",
        name: "Up-Market Pivot",
        modifiers: ModifierSet::new(20.0, 0.0, -5.0, 50.0, 0.0),
    },
];

/// The full preset library.
#[must_use]
pub fn library() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by its stable identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}
