use game_types::{Category, Difficulty, Letter};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(Letter),
    Start,
    NewGame,
    SelectCategory(Category),
    SelectDifficulty(Difficulty),
    Menu,
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    /// Parse a line of input; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut chars = line.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(match c {
                '?' => Command::Help,
                _ => match Letter::from_key(c) {
                    Some(letter) => Command::Guess(letter),
                    None => Command::Invalid(format!("'{c}' is not a letter")),
                },
            });
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "start" | "play" => Command::Start,
            "new" | "restart" => Command::NewGame,
            "menu" | "back" => Command::Menu,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "category" | "cat" => match rest.parse::<Category>() {
                Ok(category) => Command::SelectCategory(category),
                Err(e) => Command::Invalid(e.to_string()),
            },
            "difficulty" | "diff" => match rest.parse::<Difficulty>() {
                Ok(difficulty) => Command::SelectDifficulty(difficulty),
                Err(e) => Command::Invalid(e.to_string()),
            },
            _ => Command::Invalid(format!("unknown command '{line}'")),
        };
        Some(command)
    }
}
