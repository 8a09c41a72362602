use game_types::{Category, Difficulty, GuessOutcome, Letter, RoundId};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SelectionChanged {
        category: Category,
        difficulty: Difficulty,
    },
    RoundStarted {
        round_id: RoundId,
        category: Category,
        difficulty: Difficulty,
        word_length: usize,
    },
    LetterGuessed {
        round_id: RoundId,
        letter: Letter,
        outcome: GuessOutcome,
        reveal_stage: u8,
    },
    RoundWon {
        round_id: RoundId,
        word: String,
        wrong_guesses: u8,
    },
    RoundLost {
        round_id: RoundId,
        word: String,
    },
}

impl GameEvent {
    pub fn round_id(&self) -> Option<RoundId> {
        match self {
            GameEvent::SelectionChanged { .. } => None,
            GameEvent::RoundStarted { round_id, .. }
            | GameEvent::LetterGuessed { round_id, .. }
            | GameEvent::RoundWon { round_id, .. }
            | GameEvent::RoundLost { round_id, .. } => Some(*round_id),
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
