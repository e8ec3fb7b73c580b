use serde::{Deserialize, Serialize};

/// Challenge category, also used as the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    All,
    Transport,
    Energy,
    Waste,
    Water,
}

impl Category {
    /// Parse category from a tag like "transport"
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "transport" => Some(Self::Transport),
            "energy" => Some(Self::Energy),
            "waste" => Some(Self::Waste),
            "water" => Some(Self::Water),
            _ => None,
        }
    }

    /// Convert category to its tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Transport => "transport",
            Self::Energy => "energy",
            Self::Waste => "waste",
            Self::Water => "water",
        }
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Transport => "Transport",
            Self::Energy => "Energy",
            Self::Waste => "Waste",
            Self::Water => "Water",
        }
    }

    /// Get all categories in tab order
    pub fn all() -> &'static [Category] {
        &[
            Category::All,
            Category::Transport,
            Category::Energy,
            Category::Waste,
            Category::Water,
        ]
    }
}

/// How hard a catalog challenge is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
