use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad character of an opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningStyle {
    Classical,
    Positional,
    Aggressive,
    Solid,
    Flexible,
}

impl OpeningStyle {
    pub const ALL: [OpeningStyle; 5] = [
        OpeningStyle::Classical,
        OpeningStyle::Positional,
        OpeningStyle::Aggressive,
        OpeningStyle::Solid,
        OpeningStyle::Flexible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OpeningStyle::Classical => "classical",
            OpeningStyle::Positional => "positional",
            OpeningStyle::Aggressive => "aggressive",
            OpeningStyle::Solid => "solid",
            OpeningStyle::Flexible => "flexible",
        }
    }

    /// Parse a lowercase style name
    pub fn from_name(name: &str) -> Option<OpeningStyle> {
        OpeningStyle::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for OpeningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog record (matches the openings.json shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    pub name: String,
    pub eco: String,
    /// Plies in standard algebraic notation, e.g. `["e4", "e5", "Nf3"]`
    pub moves: Vec<String>,
    #[serde(default)]
    pub ideas: String,
    pub style: OpeningStyle,
    #[serde(default)]
    pub famous: Vec<String>,
}

/// Identity of an opening: the (eco, name) pair.
///
/// Trees and filtered lists are rebuilt on every change, so openings are
/// compared through this key rather than by address or full equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpeningKey<'a> {
    pub eco: &'a str,
    pub name: &'a str,
}

impl fmt::Display for OpeningKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.eco, self.name)
    }
}

impl Opening {
    pub fn key(&self) -> OpeningKey<'_> {
        OpeningKey {
            eco: &self.eco,
            name: &self.name,
        }
    }

    /// Same opening by identity (eco + name), ignoring moves and metadata
    pub fn same_as(&self, other: &Opening) -> bool {
        self.key() == other.key()
    }

    pub fn first_move(&self) -> Option<&str> {
        self.moves.first().map(|m| m.as_str())
    }
}
