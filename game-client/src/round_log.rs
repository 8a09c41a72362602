use game_core::{GameEvent, GameEventHandler};
use tracing::{debug, info};

/// Logs round outcomes and keeps a running tally for the session.
#[derive(Debug, Default)]
pub struct RoundLogger {
    started: u32,
    won: u32,
    lost: u32,
}

impl RoundLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> u32 {
        self.started
    }

    pub fn won(&self) -> u32 {
        self.won
    }

    pub fn lost(&self) -> u32 {
        self.lost
    }
}

impl GameEventHandler for RoundLogger {
    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::SelectionChanged {
                category,
                difficulty,
            } => debug!("Selected {} / {}", category, difficulty),
            GameEvent::RoundStarted {
                round_id,
                category,
                difficulty,
                word_length,
            } => {
                self.started += 1;
                info!(
                    "Round {} started: {} / {}, {} letters",
                    round_id, category, difficulty, word_length
                );
            }
            GameEvent::LetterGuessed {
                round_id,
                letter,
                outcome,
                reveal_stage,
            } => debug!(
                "Round {}: {} was {:?} (stage {})",
                round_id, letter, outcome, reveal_stage
            ),
            GameEvent::RoundWon {
                round_id,
                word,
                wrong_guesses,
            } => {
                self.won += 1;
                info!(
                    "Round {} won on {} with {} wrong guesses ({} won, {} lost)",
                    round_id, word, wrong_guesses, self.won, self.lost
                );
            }
            GameEvent::RoundLost { round_id, word } => {
                self.lost += 1;
                info!(
                    "Round {} lost on {} ({} won, {} lost)",
                    round_id, word, self.won, self.lost
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameEngine, WordBank};
    use game_types::{Category, Difficulty, GuessOutcome};
    use uuid::Uuid;

    #[test]
    fn test_tally_follows_outcomes() {
        let mut logger = RoundLogger::new();
        let round_id = Uuid::new_v4();

        logger.handle_event(GameEvent::RoundStarted {
            round_id,
            category: Category::Animals,
            difficulty: Difficulty::Easy,
            word_length: 3,
        });
        logger.handle_event(GameEvent::LetterGuessed {
            round_id,
            letter: game_types::Letter::new('C').unwrap(),
            outcome: GuessOutcome::Correct,
            reveal_stage: 0,
        });
        logger.handle_event(GameEvent::RoundWon {
            round_id,
            word: "CAT".to_string(),
            wrong_guesses: 0,
        });
        logger.handle_event(GameEvent::RoundLost {
            round_id: Uuid::new_v4(),
            word: "DOG".to_string(),
        });

        assert_eq!(logger.started(), 1);
        assert_eq!(logger.won(), 1);
        assert_eq!(logger.lost(), 1);
    }

    #[test]
    fn test_logger_registers_on_engine() {
        let bank =
            WordBank::from_lists([(Category::Animals, Difficulty::Easy, vec!["UP"])]).unwrap();
        let mut engine = GameEngine::with_seed(bank, 3);
        engine.add_handler(Box::new(RoundLogger::new()));

        engine.start_round(Category::Animals, Difficulty::Easy).unwrap();
        engine.guess('U');
        assert_eq!(engine.guess('P'), Some(GuessOutcome::Win));
    }
}
