use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use game_client::{build_session, commands::Command, config::Config, effects::EffectRunner};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Hangman...");

    let config = Config::from_env()?;
    let mut session = match build_session(&config) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to set up the game: {:#}", e);
            return Err(e);
        }
    };

    let (output, mut screen) = mpsc::unbounded_channel::<String>();
    let printer = tokio::spawn(async move {
        while let Some(line) = screen.recv().await {
            println!("{line}");
        }
    });
    let effects = EffectRunner::new(output.clone(), config.sound, config.effect_scale);

    output
        .send(session.welcome())
        .context("Output closed before the game started")?;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = input.next_line() => line.context("Failed to read input")?,
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        let update = session
            .handle(command)
            .inspect_err(|e| error!("Stopping: {:#}", e))?;
        for frame in update.lines {
            output.send(frame).context("Output closed")?;
        }
        effects.play(&update.feedback);
        if update.quit {
            break;
        }
    }

    // Pending effects finish before the printer drains and exits
    drop(effects);
    drop(output);
    printer.await.context("Output task failed")?;
    info!("Hangman shutdown complete.");
    Ok(())
}
