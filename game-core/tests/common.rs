#![allow(dead_code)]

use game_core::{GameEngine, GameEvent, GameEventHandler, WordBank};
use game_types::{Category, Difficulty, GuessOutcome};
use std::sync::{Arc, Mutex};

/// Creates a bank whose Animals/Easy list holds exactly the given words
pub fn create_bank_with_words(words: &[&str]) -> WordBank {
    WordBank::from_lists([(Category::Animals, Difficulty::Easy, words.to_vec())])
        .expect("test words are valid")
}

/// Creates a seeded engine that can only ever pick `word`
pub fn create_engine_with_word(word: &str) -> GameEngine {
    GameEngine::with_seed(create_bank_with_words(&[word]), 42)
}

/// Creates a seeded engine over the built-in dictionary
pub fn create_standard_engine(seed: u64) -> GameEngine {
    GameEngine::with_seed(WordBank::standard(), seed)
}

/// Creates an engine with a round already running on `word`
pub fn create_started_engine(word: &str) -> GameEngine {
    let mut engine = create_engine_with_word(word);
    engine
        .start_round(Category::Animals, Difficulty::Easy)
        .expect("test selection exists");
    engine
}

/// Guesses each letter in order and returns the outcomes
pub fn guess_all(engine: &mut GameEngine, letters: &str) -> Vec<Option<GuessOutcome>> {
    letters.chars().map(|letter| engine.guess(letter)).collect()
}

/// Masked word as a plain string, e.g. "C_T"
pub fn masked(engine: &GameEngine) -> String {
    engine.masked_word().into_iter().collect()
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}
