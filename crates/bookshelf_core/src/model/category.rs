//! Genre to category mapping.
//!
//! # Invariants
//! - Lookup is case-insensitive and ignores surrounding whitespace.
//! - Unknown genres always map to `Category::General`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Human-facing classification derived from a free-text genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Entertainment,
    Educational,
    Informational,
    Inspirational,
    Technical,
    Emotional,
    /// Fallback for genres outside the fixed table.
    General,
}

impl Category {
    /// Returns the label shown next to a book.
    pub fn label(self) -> &'static str {
        match self {
            Self::Entertainment => "Entertainment",
            Self::Educational => "Educational",
            Self::Informational => "Informational",
            Self::Inspirational => "Inspirational",
            Self::Technical => "Technical",
            Self::Emotional => "Emotional",
            Self::General => "General",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a genre label to its category.
pub fn categorize(genre: &str) -> Category {
    match genre.trim().to_lowercase().as_str() {
        "fiction" => Category::Entertainment,
        "science" => Category::Educational,
        "history" => Category::Informational,
        "biography" => Category::Inspirational,
        "technology" => Category::Technical,
        "romance" => Category::Emotional,
        _ => Category::General,
    }
}
