use game_types::GuessOutcome;
use std::time::Duration;

/// Delay before the success message and celebration appear
pub const WIN_MESSAGE_DELAY: Duration = Duration::from_millis(500);
/// Delay before the failure message appears
pub const LOSS_MESSAGE_DELAY: Duration = Duration::from_millis(800);
/// Delay before the solution replaces the masked word after a loss
pub const LOSS_REVEAL_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Correct,
    Wrong,
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a result message after a delay
    Message {
        text: String,
        success: bool,
        delay: Duration,
    },
    /// Burst of celebration particles after a delay
    Celebrate { delay: Duration },
    /// Replace the masked word with the solution after a delay
    RevealWord { word: String, delay: Duration },
}

impl Effect {
    pub fn delay(&self) -> Duration {
        match self {
            Effect::Message { delay, .. }
            | Effect::Celebrate { delay }
            | Effect::RevealWord { delay, .. } => *delay,
        }
    }
}

/// Sounds and effects the presentation layer plays for one accepted guess.
/// Computed once from the final outcome; nothing here feeds back into the round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub sounds: Vec<SoundCue>,
    pub effects: Vec<Effect>,
}

impl Feedback {
    pub fn for_outcome(outcome: GuessOutcome, word: &str) -> Self {
        match outcome {
            GuessOutcome::Correct => Self {
                sounds: vec![SoundCue::Click, SoundCue::Correct],
                effects: Vec::new(),
            },
            GuessOutcome::Wrong => Self {
                sounds: vec![SoundCue::Click, SoundCue::Wrong],
                effects: Vec::new(),
            },
            GuessOutcome::Win => Self {
                sounds: vec![SoundCue::Click, SoundCue::Correct, SoundCue::Win],
                effects: vec![
                    Effect::Message {
                        text: win_message(word),
                        success: true,
                        delay: WIN_MESSAGE_DELAY,
                    },
                    Effect::Celebrate {
                        delay: WIN_MESSAGE_DELAY,
                    },
                ],
            },
            GuessOutcome::Loss => Self {
                sounds: vec![SoundCue::Click, SoundCue::Wrong, SoundCue::Lose],
                effects: vec![
                    Effect::Message {
                        text: loss_message(word),
                        success: false,
                        delay: LOSS_MESSAGE_DELAY,
                    },
                    Effect::RevealWord {
                        word: word.to_string(),
                        delay: LOSS_REVEAL_DELAY,
                    },
                ],
            },
        }
    }
}

pub fn win_message(word: &str) -> String {
    format!("🎉 AMAZING! You guessed \"{word}\" correctly!")
}

pub fn loss_message(word: &str) -> String {
    format!("💀 Game Over! The word was \"{word}\". Try again!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_guesses_have_no_effects() {
        let feedback = Feedback::for_outcome(GuessOutcome::Correct, "CAT");
        assert_eq!(feedback.sounds, [SoundCue::Click, SoundCue::Correct]);
        assert!(feedback.effects.is_empty());

        let feedback = Feedback::for_outcome(GuessOutcome::Wrong, "CAT");
        assert_eq!(feedback.sounds, [SoundCue::Click, SoundCue::Wrong]);
        assert!(feedback.effects.is_empty());
    }

    #[test]
    fn test_win_feedback() {
        let feedback = Feedback::for_outcome(GuessOutcome::Win, "CAT");
        assert_eq!(feedback.sounds.last(), Some(&SoundCue::Win));
        assert_eq!(
            feedback.effects,
            [
                Effect::Message {
                    text: "🎉 AMAZING! You guessed \"CAT\" correctly!".to_string(),
                    success: true,
                    delay: Duration::from_millis(500),
                },
                Effect::Celebrate {
                    delay: Duration::from_millis(500)
                },
            ]
        );
    }

    #[test]
    fn test_loss_feedback_reveals_word_last() {
        let feedback = Feedback::for_outcome(GuessOutcome::Loss, "DOG");
        assert_eq!(feedback.sounds.last(), Some(&SoundCue::Lose));
        assert_eq!(feedback.effects.len(), 2);
        assert!(matches!(
            &feedback.effects[0],
            Effect::Message { text, success: false, .. } if text.contains("\"DOG\"")
        ));
        assert_eq!(
            feedback.effects[1],
            Effect::RevealWord {
                word: "DOG".to_string(),
                delay: Duration::from_millis(1200),
            }
        );
        assert!(feedback.effects[0].delay() < feedback.effects[1].delay());
    }
}
