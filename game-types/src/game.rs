use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{Category, Difficulty, Letter};

pub type RoundId = Uuid;

/// Wrong guesses allowed before the round is lost; also the number of figure stages
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Placeholder emitted for a letter that has not been guessed yet
pub const BLANK: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    Win,
    Loss,
}

impl GuessOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, GuessOutcome::Win | GuessOutcome::Loss)
    }

    /// Whether the guessed letter occurs in the word
    pub fn is_hit(self) -> bool {
        matches!(self, GuessOutcome::Correct | GuessOutcome::Win)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RoundStatus {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost)
    }
}

/// How a key of the virtual keyboard should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum KeyStatus {
    Available,
    Correct,
    Wrong,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyState {
    pub letter: Letter,
    pub status: KeyStatus,
}

impl KeyState {
    pub fn is_enabled(&self) -> bool {
        self.status == KeyStatus::Available
    }
}

/// Everything the presentation layer needs to draw a round.
/// The solution is only filled in once the round is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundSnapshot {
    pub id: RoundId,
    pub category: Category,
    pub difficulty: Difficulty,
    pub masked_word: Vec<char>,
    pub word_length: u32,
    pub guessed_letters: Vec<Letter>,
    pub wrong_count: u8,
    pub max_wrong: u8,
    pub reveal_stage: u8,
    pub status: RoundStatus,
    pub started_at: String, // ISO 8601 string
    pub solution: Option<String>,
}

impl RoundSnapshot {
    /// Masked word joined with spaces, e.g. "C A _"
    pub fn display_word(&self) -> String {
        spaced(self.masked_word.iter().copied())
    }

    pub fn remaining_guesses(&self) -> u8 {
        self.max_wrong.saturating_sub(self.wrong_count)
    }
}

/// Joins characters with single spaces the way words are shown on screen
pub fn spaced(chars: impl IntoIterator<Item = char>) -> String {
    let mut out = String::new();
    for c in chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> RoundSnapshot {
        RoundSnapshot {
            id: Uuid::new_v4(),
            category: Category::Animals,
            difficulty: Difficulty::Easy,
            masked_word: vec!['C', BLANK, 'T'],
            word_length: 3,
            guessed_letters: vec![Letter::new('C').unwrap(), Letter::new('T').unwrap()],
            wrong_count: 2,
            max_wrong: MAX_WRONG_GUESSES,
            reveal_stage: 2,
            status: RoundStatus::InProgress,
            started_at: "2024-01-01T00:00:00+00:00".to_string(),
            solution: None,
        }
    }

    #[test]
    fn test_display_word() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.display_word(), "C _ T");
        assert_eq!(snapshot.remaining_guesses(), 4);
    }

    #[test]
    fn test_spaced_edge_cases() {
        assert_eq!(spaced("".chars()), "");
        assert_eq!(spaced("UP".chars()), "U P");
    }

    #[test]
    fn test_outcome_classification() {
        assert!(GuessOutcome::Win.is_terminal());
        assert!(GuessOutcome::Loss.is_terminal());
        assert!(!GuessOutcome::Correct.is_terminal());
        assert!(GuessOutcome::Win.is_hit());
        assert!(!GuessOutcome::Loss.is_hit());
        assert!(RoundStatus::Lost.is_over());
        assert!(!RoundStatus::NotStarted.is_over());
    }

    #[test]
    fn test_snapshot_hides_solution_in_json() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["status"], "InProgress");
        assert_eq!(json["solution"], serde_json::Value::Null);
        assert_eq!(json["masked_word"][1], "_");
        assert_eq!(json["guessed_letters"][0], "C");
    }
}
