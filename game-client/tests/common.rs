#![allow(dead_code)]

use game_client::commands::Command;
use game_client::session::{Session, Update};
use game_core::{GameEngine, WordBank};
use game_types::{Category, Difficulty, Selection};
use std::path::PathBuf;

/// Creates a session over a bank whose Animals/Easy list holds `words`
pub fn create_test_session(words: &[&str]) -> Session {
    let bank = WordBank::from_lists([(Category::Animals, Difficulty::Easy, words.to_vec())])
        .expect("test words are valid");
    Session::new(
        GameEngine::with_seed(bank, 42),
        Selection::new(Category::Animals, Difficulty::Easy),
    )
}

/// Feeds raw input lines through the parser and session, like the terminal loop does
pub fn play_lines(session: &mut Session, lines: &[&str]) -> Vec<Update> {
    lines
        .iter()
        .filter_map(|line| Command::parse(line))
        .map(|command| session.handle(command).expect("command should succeed"))
        .collect()
}

/// Writes a word list to a unique file in the temp directory
pub fn write_word_list(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "hangman-{}-{}.txt",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("temp dir is writable");
    path
}
