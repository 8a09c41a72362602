use anyhow::{Context, Result, bail};
use game_types::{Category, Difficulty, Selection};
use std::env;
use std::path::PathBuf;

/// Largest accepted effect delay multiplier
pub const MAX_EFFECT_SCALE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub category: Category,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub words_file: Option<PathBuf>,
    pub sound: bool,
    pub effect_scale: f64,
}

impl Config {
    /// Read the configuration from `HANGMAN_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let category = match lookup("HANGMAN_CATEGORY") {
            Some(value) => value.parse().context("Invalid HANGMAN_CATEGORY")?,
            None => defaults.category,
        };
        let difficulty = match lookup("HANGMAN_DIFFICULTY") {
            Some(value) => value.parse().context("Invalid HANGMAN_DIFFICULTY")?,
            None => defaults.difficulty,
        };
        let seed = lookup("HANGMAN_SEED")
            .map(|value| value.trim().parse::<u64>())
            .transpose()
            .context("Invalid HANGMAN_SEED")?;
        let words_file = lookup("HANGMAN_WORDS_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let sound = match lookup("HANGMAN_SOUND") {
            Some(value) => parse_flag(&value).context("Invalid HANGMAN_SOUND")?,
            None => defaults.sound,
        };
        let effect_scale = lookup("HANGMAN_EFFECT_SCALE")
            .unwrap_or_else(|| defaults.effect_scale.to_string())
            .trim()
            .parse::<f64>()
            .context("Invalid HANGMAN_EFFECT_SCALE")?;
        if !(0.0..=MAX_EFFECT_SCALE).contains(&effect_scale) {
            bail!("Invalid HANGMAN_EFFECT_SCALE: must be between 0 and {MAX_EFFECT_SCALE}");
        }

        Ok(Self {
            category,
            difficulty,
            seed,
            words_file,
            sound,
            effect_scale,
        })
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.category, self.difficulty)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            category: Category::default(),
            difficulty: Difficulty::default(),
            seed: None,
            words_file: None,
            sound: true,
            effect_scale: 1.0,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected true or false, got '{other}'"),
    }
}
