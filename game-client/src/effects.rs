use game_core::{Effect, Feedback};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::render;

const CONFETTI: [char; 6] = ['*', '+', 'o', '.', '~', '✦'];
const CELEBRATION_WIDTH: usize = 40;
const CELEBRATION_FRAMES: usize = 5;
const PARTICLES_PER_FRAME: usize = 10;
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Plays sounds and schedules delayed effects as detached tasks.
/// Tasks only hold copies of the values they display and write to the output channel.
#[derive(Debug, Clone)]
pub struct EffectRunner {
    output: UnboundedSender<String>,
    sound: bool,
    scale: f64,
}

impl EffectRunner {
    pub fn new(output: UnboundedSender<String>, sound: bool, scale: f64) -> Self {
        Self {
            output,
            sound,
            scale,
        }
    }

    /// Emit sound cues now and spawn one task per effect
    pub fn play(&self, feedback: &Feedback) -> Vec<JoinHandle<()>> {
        if self.sound {
            for cue in &feedback.sounds {
                // Output closing means the session is over
                let _ = self.output.send(render::sound_marker(*cue).to_string());
            }
        }

        feedback
            .effects
            .iter()
            .cloned()
            .map(|effect| self.spawn(effect))
            .collect()
    }

    /// Scale a delay, keeping it unscaled when the result is not a valid `Duration`
    fn scaled(&self, delay: Duration) -> Duration {
        Duration::try_from_secs_f64(delay.as_secs_f64() * self.scale).unwrap_or_else(|e| {
            warn!("Ignoring effect scale {}: {}", self.scale, e);
            delay
        })
    }

    fn spawn(&self, effect: Effect) -> JoinHandle<()> {
        let output = self.output.clone();
        let delay = self.scaled(effect.delay());
        let frame_interval = self.scaled(FRAME_INTERVAL);
        let seed = rand::random::<u64>();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!("Running effect {:?}", effect);
            match effect {
                Effect::Message { text, .. } => {
                    let _ = output.send(text);
                }
                Effect::RevealWord { word, .. } => {
                    let _ = output.send(render::revealed_word(&word));
                }
                Effect::Celebrate { .. } => {
                    for frame in celebration_frames(seed) {
                        if output.send(frame).is_err() {
                            return;
                        }
                        tokio::time::sleep(frame_interval).await;
                    }
                }
            }
        })
    }
}

/// Frames of confetti bursting out from the middle of the line
pub fn celebration_frames(seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let center = CELEBRATION_WIDTH / 2;

    (1..=CELEBRATION_FRAMES)
        .map(|frame| {
            let spread = center * frame / CELEBRATION_FRAMES;
            let mut line = vec![' '; CELEBRATION_WIDTH];
            for _ in 0..PARTICLES_PER_FRAME {
                let offset = rng.gen_range(0..=spread);
                let column = if rng.r#gen::<bool>() {
                    center.saturating_sub(offset)
                } else {
                    (center + offset).min(CELEBRATION_WIDTH - 1)
                };
                line[column] = CONFETTI[rng.gen_range(0..CONFETTI.len())];
            }
            line.into_iter().collect::<String>().trim_end().to_string()
        })
        .collect()
}
