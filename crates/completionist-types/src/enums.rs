//! Enumeration types for the Completionist tracker.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Item Kinds
// ---------------------------------------------------------------------------

/// The kind of a collectible item.
///
/// Kind only affects presentation (glyph, notification wording) and whether
/// the item is *reserved*. Reserved items (rare and finale) are tracked per
/// mode like any other item but are excluded from ordinary per-mode totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A regular objective, visible from the start.
    Ordinary,
    /// A hidden bonus objective revealed through play.
    HiddenBonus,
    /// A challenge or speed-run objective, usually hidden until unlocked.
    Challenge,
    /// A rare, hard-to-find objective counted separately.
    Rare,
    /// The terminal objective of the whole collection.
    Finale,
}

impl ItemKind {
    /// Display glyph used by renderers.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ordinary => "⭐",
            Self::HiddenBonus => "🌟",
            Self::Challenge => "☄️",
            Self::Rare => "💚",
            Self::Finale => "🌠",
        }
    }

    /// Lowercase human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::HiddenBonus => "hidden bonus",
            Self::Challenge => "challenge",
            Self::Rare => "rare",
            Self::Finale => "finale",
        }
    }

    /// Whether items of this kind start hidden until revealed.
    pub const fn hidden_by_default(self) -> bool {
        matches!(self, Self::HiddenBonus | Self::Challenge)
    }

    /// Whether items of this kind are excluded from ordinary per-mode totals.
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Rare | Self::Finale)
    }
}

// ---------------------------------------------------------------------------
// Character Modes
// ---------------------------------------------------------------------------

/// One of the two parallel progress namespaces over the same hierarchy.
///
/// `Primary` is always available. `Alternate` becomes selectable once the
/// primary namespace reaches the configured unlock threshold.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CharacterMode {
    /// The initially-available mode (first playthrough).
    #[default]
    Primary,
    /// The gated second-playthrough mode.
    Alternate,
}

impl CharacterMode {
    /// Both modes, primary first.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Alternate];

    /// The mode that is not `self`.
    pub const fn other(self) -> Self {
        match self {
            Self::Primary => Self::Alternate,
            Self::Alternate => Self::Primary,
        }
    }

    /// Stable lowercase name used in logs and command-line arguments.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Alternate => "alternate",
        }
    }
}

impl core::fmt::Display for CharacterMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for CharacterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "mario" => Ok(Self::Primary),
            "alternate" | "luigi" => Ok(Self::Alternate),
            other => Err(format!("unknown character mode: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reserved_kinds() {
        assert!(ItemKind::Rare.is_reserved());
        assert!(ItemKind::Finale.is_reserved());
        assert!(!ItemKind::Ordinary.is_reserved());
        assert!(!ItemKind::HiddenBonus.is_reserved());
        assert!(!ItemKind::Challenge.is_reserved());
    }

    #[test]
    fn mode_other_is_involution() {
        for mode in CharacterMode::ALL {
            assert_eq!(mode.other().other(), mode);
            assert_ne!(mode.other(), mode);
        }
    }

    #[test]
    fn mode_parses_aliases() {
        assert_eq!("Luigi".parse::<CharacterMode>(), Ok(CharacterMode::Alternate));
        assert_eq!("primary".parse::<CharacterMode>(), Ok(CharacterMode::Primary));
        assert!("wario".parse::<CharacterMode>().is_err());
    }

    #[test]
    fn mode_serializes_snake_case() {
        let json = serde_json::to_string(&CharacterMode::Alternate).unwrap();
        assert_eq!(json, "\"alternate\"");
    }
}
