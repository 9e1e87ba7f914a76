//! Author stance on climate change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical position of a social-media author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Believer,
    Denier,
    Neutral,
}

impl Stance {
    /// All three stances.
    pub fn all() -> &'static [Stance] {
        &[Self::Believer, Self::Denier, Self::Neutral]
    }

    /// Stance name as used in source tables and asset names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Believer => "believer",
            Self::Denier => "denier",
            Self::Neutral => "neutral",
        }
    }

    /// Parse from string. Case-insensitive, surrounding whitespace ignored.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "believer" => Some(Self::Believer),
            "denier" => Some(Self::Denier),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
