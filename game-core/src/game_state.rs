use chrono::{SecondsFormat, Utc};
use game_types::{
    BLANK, Category, Difficulty, GameError, GuessOutcome, KeyState, KeyStatus, Letter,
    MAX_WRONG_GUESSES, RoundId, RoundSnapshot, RoundStatus, Selection, spaced,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{GameEvent, GameEventBus, GameEventHandler, LetterSet, WordBank, is_playable_word};

/// One playthrough, from word selection to win or loss.
#[derive(Debug, Clone)]
pub struct Round {
    id: RoundId,
    category: Category,
    difficulty: Difficulty,
    secret_word: String, // Hidden from snapshots until the round is over
    guessed: LetterSet,
    wrong_count: u8,
    status: RoundStatus,
    started_at: String,
}

impl Round {
    pub fn new(
        id: RoundId,
        category: Category,
        difficulty: Difficulty,
        secret_word: &str,
    ) -> Result<Self, GameError> {
        if !is_playable_word(secret_word) || !secret_word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GameError::InvalidWord {
                word: secret_word.to_string(),
            });
        }

        Ok(Self {
            id,
            category,
            difficulty,
            secret_word: secret_word.to_string(),
            guessed: LetterSet::new(),
            wrong_count: 0,
            status: RoundStatus::InProgress,
            started_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Apply a guess. Returns `None` when the guess is rejected: the round is
    /// over, the letter was already tried, or the character is not A-Z.
    /// A rejected guess leaves every field untouched.
    pub fn guess(&mut self, letter: char) -> Option<GuessOutcome> {
        if self.is_over() {
            return None;
        }
        let letter = Letter::new(letter)?;
        if !self.guessed.insert(letter) {
            return None;
        }

        let mut outcome = if self.secret_word.contains(letter.as_char()) {
            GuessOutcome::Correct
        } else {
            self.wrong_count += 1;
            GuessOutcome::Wrong
        };

        if self.is_solved() {
            self.status = RoundStatus::Won;
            outcome = GuessOutcome::Win;
        } else if self.wrong_count == MAX_WRONG_GUESSES {
            self.status = RoundStatus::Lost;
            outcome = GuessOutcome::Loss;
        }

        Some(outcome)
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The word being guessed. Presentation code should only show it once the round is over.
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn solution(&self) -> Option<&str> {
        self.is_over().then_some(self.secret_word.as_str())
    }

    pub fn guessed_letters(&self) -> &LetterSet {
        &self.guessed
    }

    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(letter)
    }

    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    /// How many stages of the figure to draw; equal to the wrong guess count
    pub fn reveal_stage(&self) -> u8 {
        self.wrong_count
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn is_solved(&self) -> bool {
        self.secret_word.chars().all(|c| self.guessed.contains_char(c))
    }

    pub fn masked_word(&self) -> Vec<char> {
        self.secret_word
            .chars()
            .map(|c| if self.guessed.contains_char(c) { c } else { BLANK })
            .collect()
    }

    /// Masked word joined with spaces, e.g. "C A _"
    pub fn display_word(&self) -> String {
        spaced(self.masked_word())
    }

    pub fn keyboard(&self) -> Vec<KeyState> {
        Letter::alphabet()
            .map(|letter| {
                let status = if self.guessed.contains(letter) {
                    if self.secret_word.contains(letter.as_char()) {
                        KeyStatus::Correct
                    } else {
                        KeyStatus::Wrong
                    }
                } else if self.is_over() {
                    KeyStatus::Disabled
                } else {
                    KeyStatus::Available
                };
                KeyState { letter, status }
            })
            .collect()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            id: self.id,
            category: self.category,
            difficulty: self.difficulty,
            masked_word: self.masked_word(),
            word_length: self.secret_word.len() as u32,
            guessed_letters: self.guessed.iter().collect(),
            wrong_count: self.wrong_count,
            max_wrong: MAX_WRONG_GUESSES,
            reveal_stage: self.reveal_stage(),
            status: self.status,
            started_at: self.started_at.clone(),
            solution: self.solution().map(str::to_string),
        }
    }
}

/// Owns the word bank, the current selection and the current round.
/// The random source is injectable so rounds can be made deterministic.
pub struct GameEngine<R = StdRng> {
    word_bank: WordBank,
    selection: Selection,
    round: Option<Round>,
    rng: R,
    event_bus: GameEventBus,
}

impl GameEngine<StdRng> {
    pub fn new(word_bank: WordBank) -> Self {
        Self::with_rng(word_bank, StdRng::from_entropy())
    }

    pub fn with_seed(word_bank: WordBank, seed: u64) -> Self {
        Self::with_rng(word_bank, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(word_bank: WordBank, rng: R) -> Self {
        Self {
            word_bank,
            selection: Selection::default(),
            round: None,
            rng,
            event_bus: GameEventBus::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.event_bus.handler_count()
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select_category(&mut self, category: Category) {
        self.set_selection(Selection::new(category, self.selection.difficulty));
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.set_selection(Selection::new(self.selection.category, difficulty));
    }

    fn set_selection(&mut self, selection: Selection) {
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        debug!("Selection changed to {} / {}", selection.category, selection.difficulty);
        self.event_bus.publish(GameEvent::SelectionChanged {
            category: selection.category,
            difficulty: selection.difficulty,
        });
    }

    /// Replace the current round with a fresh one drawn from the given list
    pub fn start_round(
        &mut self,
        category: Category,
        difficulty: Difficulty,
    ) -> Result<&Round, GameError> {
        let words = self.word_bank.words_for(category, difficulty)?;
        let word = words
            .choose(&mut self.rng)
            .ok_or(GameError::EmptyWordList {
                category,
                difficulty,
            })?
            .clone();

        let round = Round::new(Uuid::new_v4(), category, difficulty, &word)?;
        self.set_selection(Selection::new(category, difficulty));

        info!(
            "Started round {} ({} / {}, {} letters)",
            round.id(),
            category,
            difficulty,
            word.len()
        );
        self.event_bus.publish(GameEvent::RoundStarted {
            round_id: round.id(),
            category,
            difficulty,
            word_length: word.len(),
        });

        Ok(self.round.insert(round))
    }

    /// Start a new round with the current selection
    pub fn restart(&mut self) -> Result<&Round, GameError> {
        let Selection {
            category,
            difficulty,
        } = self.selection;
        self.start_round(category, difficulty)
    }

    /// Guess a letter in the current round. `None` means the guess was rejected
    /// and nothing changed.
    pub fn guess(&mut self, letter: char) -> Option<GuessOutcome> {
        let round = self.round.as_mut()?;
        let Some(outcome) = round.guess(letter) else {
            debug!("Ignored guess {:?} in round {}", letter, round.id());
            return None;
        };

        let round_id = round.id();
        let reveal_stage = round.reveal_stage();
        debug!("Guess {} in round {}: {:?}", letter, round_id, outcome);

        let mut events = vec![GameEvent::LetterGuessed {
            round_id,
            letter: Letter::new(letter)?,
            outcome,
            reveal_stage,
        }];
        match outcome {
            GuessOutcome::Win => {
                info!("Round {} won with {} wrong guesses", round_id, round.wrong_count());
                events.push(GameEvent::RoundWon {
                    round_id,
                    word: round.secret_word().to_string(),
                    wrong_guesses: round.wrong_count(),
                });
            }
            GuessOutcome::Loss => {
                info!("Round {} lost", round_id);
                events.push(GameEvent::RoundLost {
                    round_id,
                    word: round.secret_word().to_string(),
                });
            }
            GuessOutcome::Correct | GuessOutcome::Wrong => {}
        }

        for event in events {
            self.event_bus.publish(event);
        }
        Some(outcome)
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn status(&self) -> RoundStatus {
        self.round
            .as_ref()
            .map_or(RoundStatus::NotStarted, Round::status)
    }

    pub fn masked_word(&self) -> Vec<char> {
        self.round.as_ref().map(Round::masked_word).unwrap_or_default()
    }

    pub fn reveal_stage(&self) -> u8 {
        self.round.as_ref().map_or(0, Round::reveal_stage)
    }

    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.round.as_ref().map(Round::snapshot)
    }

    /// Keyboard affordances; every key is available before the first round
    pub fn keyboard(&self) -> Vec<KeyState> {
        match &self.round {
            Some(round) => round.keyboard(),
            None => Letter::alphabet()
                .map(|letter| KeyState {
                    letter,
                    status: KeyStatus::Available,
                })
                .collect(),
        }
    }
}

impl<R> std::fmt::Debug for GameEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("selection", &self.selection)
            .field("round", &self.round)
            .field("event_bus", &self.event_bus)
            .finish_non_exhaustive()
    }
}
