pub mod commands;
pub mod config;
pub mod effects;
pub mod render;
pub mod round_log;
pub mod session;

use anyhow::{Context, Result};
use game_core::{GameEngine, WordBank};
use tracing::info;

use crate::config::Config;
use crate::round_log::RoundLogger;
use crate::session::Session;

/// Load the configured word list, falling back to the built-in dictionary
pub fn load_word_bank(config: &Config) -> Result<WordBank> {
    let Some(path) = &config.words_file else {
        return Ok(WordBank::standard());
    };

    info!("Loading words from {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let bank = WordBank::from_word_list(&text)
        .with_context(|| format!("Failed to parse word list {}", path.display()))?;
    info!("Loaded {} words", bank.len());
    Ok(bank)
}

/// Build the engine and session described by the configuration
pub fn build_session(config: &Config) -> Result<Session> {
    let word_bank = load_word_bank(config)?;
    let mut engine = match config.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            GameEngine::with_seed(word_bank, seed)
        }
        None => GameEngine::new(word_bank),
    };
    engine.add_handler(Box::new(RoundLogger::new()));
    Ok(Session::new(engine, config.selection()))
}
