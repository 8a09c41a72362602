use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::{Category, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("no word list for {category} / {difficulty}")]
    UnknownSelection {
        category: Category,
        difficulty: Difficulty,
    },
    #[error("word list for {category} / {difficulty} is empty")]
    EmptyWordList {
        category: Category,
        difficulty: Difficulty,
    },
    #[error("invalid word '{word}': only letters A-Z are allowed")]
    InvalidWord { word: String },
    #[error("unknown category '{name}'")]
    UnknownCategory { name: String },
    #[error("unknown difficulty '{name}'")]
    UnknownDifficulty { name: String },
    #[error("malformed word list at line {line}: {reason}")]
    MalformedWordList { line: usize, reason: String },
}
