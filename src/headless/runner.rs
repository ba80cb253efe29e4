//! Headless mode runner - main event loop without TUI
//!
//! Drives the same [`Engine`] as the terminal front end and turns its events,
//! plus the "favorite changed" signal, into NDJSON on stdout.

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use favgame_app::signals::spawn_signal_handler;
use favgame_app::{AppState, EngineEvent, FavoriteEvent, Message};
use favgame_core::prelude::*;

use super::HeadlessEvent;
use crate::launch::DetailScreen;

/// Progress of the one-shot `--toggle` tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutoToggle {
    Off,
    /// Waiting for the screen to settle before tapping
    Waiting,
    /// Tapped; quit once the save resolves
    Sent,
}

impl AutoToggle {
    fn new(enabled: bool) -> Self {
        if enabled {
            Self::Waiting
        } else {
            Self::Off
        }
    }

    /// Advance against the current state, returning a message to process
    fn step(&mut self, state: &AppState) -> Option<Message> {
        match self {
            Self::Waiting if !state.is_busy() => {
                *self = Self::Sent;
                info!("Auto toggle: tapping favorite");
                Some(Message::ToggleFavorite)
            }
            Self::Sent if !state.is_busy() => {
                *self = Self::Off;
                info!("Auto toggle: done");
                Some(Message::Quit)
            }
            _ => None,
        }
    }
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(screen: DetailScreen, toggle_once: bool) -> Result<()> {
    info!("favgame starting in HEADLESS mode");

    let DetailScreen { mut engine, bus } = screen;
    let mut engine_events = engine.subscribe();
    let mut favorite_events = bus.subscribe();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });
    spawn_signal_handler(engine.msg_sender());

    engine.start();
    flush_events(&mut engine_events, &mut favorite_events);

    let mut auto_toggle = AutoToggle::new(toggle_once);

    loop {
        if let Some(msg) = auto_toggle.step(&engine.state) {
            engine.process_message(msg);
            flush_events(&mut engine_events, &mut favorite_events);
        }

        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        if !engine.process_next().await {
            info!("Message channel closed");
            break;
        }
        flush_events(&mut engine_events, &mut favorite_events);
    }

    engine.shutdown();
    info!("favgame headless mode exiting");
    Ok(())
}

/// Write every queued engine event and favorite signal as NDJSON
fn flush_events(
    engine_events: &mut broadcast::Receiver<EngineEvent>,
    favorite_events: &mut broadcast::Receiver<FavoriteEvent>,
) {
    loop {
        match engine_events.try_recv() {
            Ok(event) => {
                if let Some(line) = HeadlessEvent::from_engine_event(&event) {
                    line.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine event(s)", skipped);
            }
            Err(_) => break,
        }
    }

    loop {
        match favorite_events.try_recv() {
            Ok(FavoriteEvent::Changed) => HeadlessEvent::favorite_changed().emit(),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} favorite signal(s)", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Parse one stdin command line
fn parse_command(line: &str) -> Option<Message> {
    match line.trim() {
        "f" | "toggle" => Some(Message::ToggleFavorite),
        "r" | "refresh" => Some(Message::ScreenAppeared),
        "q" | "quit" => Some(Message::Quit),
        _ => None,
    }
}

/// Forward stdin commands to the message channel (blocking version)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match parse_command(trimmed) {
                    Some(msg) => {
                        let quit = matches!(msg, Message::Quit);
                        info!("Stdin: {}", trimmed);
                        if msg_tx.blocking_send(msg).is_err() || quit {
                            break;
                        }
                    }
                    None => warn!("Unknown stdin command: {}", trimmed),
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
