use game_core::{FigurePart, SoundCue, WordBank};
use game_types::{KeyState, KeyStatus, RoundSnapshot, Selection, spaced};
use std::fmt::Write;

const GALLOWS: [&str; 7] = [
    "  +---+",
    "  |   |",
    "      |",
    "      |",
    "      |",
    "      |",
    "=========",
];

/// Row and column where each figure part is drawn on the gallows
fn part_cell(part: FigurePart) -> (usize, usize, char) {
    match part {
        FigurePart::Head => (2, 2, 'O'),
        FigurePart::Body => (3, 2, '|'),
        FigurePart::LeftArm => (3, 1, '/'),
        FigurePart::RightArm => (3, 3, '\\'),
        FigurePart::LeftLeg => (4, 1, '/'),
        FigurePart::RightLeg => (4, 3, '\\'),
    }
}

/// The gallows with every part visible at the given reveal stage
pub fn gallows(stage: u8) -> String {
    let mut rows: Vec<Vec<char>> = GALLOWS.iter().map(|row| row.chars().collect()).collect();
    for part in FigurePart::visible_at(stage) {
        let (row, col, glyph) = part_cell(*part);
        rows[row][col] = glyph;
    }
    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn key_label(key: &KeyState) -> String {
    match key.status {
        KeyStatus::Available => format!("[{}]", key.letter),
        KeyStatus::Correct => format!("+{}+", key.letter),
        KeyStatus::Wrong => format!("-{}-", key.letter),
        KeyStatus::Disabled => format!(" {} ", key.letter.as_char().to_ascii_lowercase()),
    }
}

/// Virtual keyboard in two rows of thirteen keys
pub fn keyboard(keys: &[KeyState]) -> String {
    keys.chunks(13)
        .map(|row| row.iter().map(key_label).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn selection_header(selection: Selection) -> String {
    format!(
        "{} {}  ·  {} {}",
        selection.category.emoji(),
        selection.category,
        selection.difficulty.emoji(),
        selection.difficulty
    )
}

pub fn game_screen(snapshot: &RoundSnapshot, keys: &[KeyState]) -> String {
    let mut out = String::new();
    let selection = Selection::new(snapshot.category, snapshot.difficulty);
    let _ = writeln!(out, "{}", selection_header(selection));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", gallows(snapshot.reveal_stage));
    let _ = writeln!(out);
    let _ = writeln!(out, "    {}", snapshot.display_word());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Wrong guesses: {}/{}",
        snapshot.wrong_count, snapshot.max_wrong
    );
    let _ = write!(out, "{}", keyboard(keys));
    out
}

pub fn menu_screen(selection: Selection, bank: &WordBank) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== HANGMAN ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Categories:");
    for category in bank.categories() {
        let marker = if category == selection.category { '>' } else { ' ' };
        let _ = writeln!(out, " {marker} {} {}", category.emoji(), category);
    }
    let _ = writeln!(out, "Difficulties:");
    for difficulty in bank.difficulties(selection.category) {
        let marker = if difficulty == selection.difficulty { '>' } else { ' ' };
        let _ = writeln!(out, " {marker} {} {}", difficulty.emoji(), difficulty);
    }
    let _ = writeln!(out);
    let _ = write!(
        out,
        "Selected: {}. Type 'start' to play or 'help' for commands.",
        selection_header(selection)
    );
    out
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     <letter>            guess a letter\n  \
     start               start playing with the current selection\n  \
     new                 start a new word\n  \
     category <name>     Animals, Countries, Food, Movies, Sports\n  \
     difficulty <name>   Easy, Medium, Hard\n  \
     menu                back to the selection menu\n  \
     quit                leave the game"
}

/// Word revealed in full after a loss
pub fn revealed_word(word: &str) -> String {
    format!("    {}", spaced(word.chars()))
}

pub fn sound_marker(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Click => "♪ click",
        SoundCue::Correct => "♪ ding",
        SoundCue::Wrong => "♪ buzz",
        SoundCue::Win => "♪ fanfare",
        SoundCue::Lose => "♪ womp womp",
    }
}
