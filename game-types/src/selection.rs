use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::GameError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Category {
    #[default]
    Animals,
    Countries,
    Food,
    Movies,
    Sports,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Animals,
        Category::Countries,
        Category::Food,
        Category::Movies,
        Category::Sports,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Animals => "Animals",
            Category::Countries => "Countries",
            Category::Food => "Food",
            Category::Movies => "Movies",
            Category::Sports => "Sports",
        }
    }

    /// Emoji shown next to the category in selectors and headers
    pub fn emoji(self) -> &'static str {
        match self {
            Category::Animals => "🐾",
            Category::Countries => "🌍",
            Category::Food => "🍕",
            Category::Movies => "🎬",
            Category::Sports => "⚽",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownCategory {
                name: wanted.to_string(),
            })
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Difficulty::Easy => "😊",
            Difficulty::Medium => "🤔",
            Difficulty::Hard => "🔥",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownDifficulty {
                name: wanted.to_string(),
            })
    }
}

/// The category/difficulty pair a new round is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Selection {
    pub category: Category,
    pub difficulty: Difficulty,
}

impl Selection {
    pub fn new(category: Category, difficulty: Difficulty) -> Self {
        Self {
            category,
            difficulty,
        }
    }
}

/// An uppercase ASCII letter A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Letter(char);

impl Letter {
    /// Accepts only an uppercase A-Z character
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_uppercase().then_some(Self(c))
    }

    /// Normalises raw key input (either case) into a letter
    pub fn from_key(c: char) -> Option<Self> {
        Self::new(c.to_ascii_uppercase())
    }

    /// Zero-based position in the alphabet
    pub fn index(self) -> usize {
        (self.0 as u8 - b'A') as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < 26).then(|| Self((b'A' + index as u8) as char))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// All 26 letters in keyboard order
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(|b| Letter(b as char))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!("animals".parse::<Category>().unwrap(), Category::Animals);
        assert_eq!(" SPORTS ".parse::<Category>().unwrap(), Category::Sports);

        let err = "Plants".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            GameError::UnknownCategory {
                name: "Plants".to_string()
            }
        );
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.category, Category::Animals);
        assert_eq!(selection.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_letter_validation() {
        assert_eq!(Letter::new('A').map(Letter::as_char), Some('A'));
        assert!(Letter::new('a').is_none());
        assert!(Letter::new('1').is_none());
        assert!(Letter::new('É').is_none());

        assert_eq!(Letter::from_key('q').map(Letter::as_char), Some('Q'));
        assert!(Letter::from_key('?').is_none());
    }

    #[test]
    fn test_letter_index_round_trip() {
        assert_eq!(Letter::new('A').unwrap().index(), 0);
        assert_eq!(Letter::new('Z').unwrap().index(), 25);
        assert_eq!(Letter::from_index(2).unwrap().as_char(), 'C');
        assert!(Letter::from_index(26).is_none());
        assert_eq!(Letter::alphabet().count(), 26);
    }
}
