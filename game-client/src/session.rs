use anyhow::{Context, Result};
use game_core::{Feedback, GameEngine, SoundCue};
use game_types::{Letter, Selection};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::commands::Command;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Menu,
    Game,
}

/// What to show and play after handling one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    pub lines: Vec<String>,
    pub feedback: Feedback,
    pub quit: bool,
}

impl Update {
    fn show(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    fn with_click(mut self) -> Self {
        self.feedback.sounds.insert(0, SoundCue::Click);
        self
    }
}

/// The presentation layer's state: one engine plus which page is showing.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    engine: GameEngine<R>,
    page: Page,
}

impl<R: Rng> Session<R> {
    pub fn new(mut engine: GameEngine<R>, selection: Selection) -> Self {
        engine.select_category(selection.category);
        engine.select_difficulty(selection.difficulty);
        Self {
            engine,
            page: Page::Menu,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn welcome(&self) -> String {
        self.menu_screen()
    }

    /// Apply one command. Errors are configuration problems (an unknown
    /// category/difficulty pair for the loaded word list) and end the session.
    pub fn handle(&mut self, command: Command) -> Result<Update> {
        debug!("Handling {:?} on {:?} page", command, self.page);
        let update = match command {
            Command::Guess(letter) => self.guess(letter),
            Command::Start | Command::NewGame => {
                self.start()?;
                Update::show(self.game_screen()).with_click()
            }
            Command::SelectCategory(category) => {
                self.engine.select_category(category);
                Update::show(self.menu_screen()).with_click()
            }
            Command::SelectDifficulty(difficulty) => {
                self.engine.select_difficulty(difficulty);
                Update::show(self.menu_screen()).with_click()
            }
            Command::Menu => {
                self.page = Page::Menu;
                Update::show(self.menu_screen()).with_click()
            }
            Command::Help => Update::show(render::help_text()),
            Command::Quit => Update {
                lines: vec!["Thanks for playing!".to_string()],
                quit: true,
                ..Update::default()
            },
            Command::Invalid(reason) => {
                Update::show(format!("{reason}. Type 'help' for commands."))
            }
        };
        Ok(update)
    }

    fn start(&mut self) -> Result<()> {
        let selection = self.engine.selection();
        self.engine.restart().with_context(|| {
            format!(
                "Cannot start a round for {} / {}",
                selection.category, selection.difficulty
            )
        })?;
        self.page = Page::Game;
        info!("New round on {} / {}", selection.category, selection.difficulty);
        Ok(())
    }

    fn guess(&mut self, letter: Letter) -> Update {
        if self.page == Page::Menu {
            return Update::show("Type 'start' to begin a round.");
        }

        let Some(round) = self.engine.round() else {
            return Update::show("No round in progress. Type 'new' to start one.");
        };
        if round.is_over() {
            return Update::show("This round is over. Type 'new' to play again.");
        }
        if round.has_guessed(letter) {
            return Update::show(format!("You already tried {letter}."));
        }

        let Some(outcome) = self.engine.guess(letter.as_char()) else {
            return Update::default();
        };
        let word = self
            .engine
            .round()
            .map(|round| round.secret_word().to_string())
            .unwrap_or_default();

        Update {
            lines: vec![self.game_screen()],
            feedback: Feedback::for_outcome(outcome, &word),
            quit: false,
        }
    }

    fn game_screen(&self) -> String {
        match self.engine.snapshot() {
            Some(snapshot) => render::game_screen(&snapshot, &self.engine.keyboard()),
            None => self.menu_screen(),
        }
    }

    fn menu_screen(&self) -> String {
        render::menu_screen(self.engine.selection(), self.engine.word_bank())
    }
}
