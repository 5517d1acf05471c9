//! Observers that report game progress to a writer.

use crate::config::RenderStyle;
use crate::render::render;
use serde::Serialize;
use std::io::{self, Write};
use strictly_grid::{GameObserver, GameSnapshot};
use tracing::warn;

/// Observer that writes to an output stream and can fail doing so.
///
/// Observer hooks cannot return errors, so a sink keeps the first write
/// failure and stops writing until the error is taken.
pub trait EventSink: GameObserver {
    /// Takes the first write error since the last call, if any.
    fn take_error(&mut self) -> Option<io::Error>;
}

/// Prints a running console log of the game.
///
/// Output shape:
///
/// ```text
/// Start game
/// _ _ _
/// ...
///
/// Step of player X
/// x _ _
/// ...
/// The winner is X.
///
/// End game
/// ```
#[derive(Debug)]
pub struct ConsoleObserver<W: Write> {
    out: W,
    style: RenderStyle,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer writing boards in `style` to `out`.
    pub fn new(out: W, style: RenderStyle) -> Self {
        Self {
            out,
            style,
            error: None,
        }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            warn!(error = %e, "Failed to write console output");
            self.error = Some(e);
        }
    }
}

impl<W: Write> EventSink for ConsoleObserver<W> {
    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_start(&mut self, snapshot: &GameSnapshot) {
        let text = format!("Start game\n{}", render(snapshot.board(), self.style));
        self.emit(&text);
    }

    fn on_update(&mut self, snapshot: &GameSnapshot) {
        let Some(player) = snapshot.last_mover() else {
            return;
        };
        let text = format!(
            "\nStep of player {}\n{}",
            player,
            render(snapshot.board(), self.style)
        );
        self.emit(&text);
    }

    fn on_end(&mut self, snapshot: &GameSnapshot) {
        let verdict = match snapshot.result().winner() {
            Some(winner) => format!("The winner is {}.", winner),
            None => "No winner".to_string(),
        };
        self.emit(&format!("{}\n\nEnd game\n", verdict));
    }
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum EventKind {
    Start,
    Update,
    End,
}

#[derive(Serialize)]
struct Event<'a> {
    event: EventKind,
    snapshot: &'a GameSnapshot,
}

/// Writes one JSON object per event, newline-delimited.
#[derive(Debug)]
pub struct JsonObserver<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonObserver<W> {
    /// Creates an observer writing JSON lines to `out`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn emit(&mut self, event: EventKind, snapshot: &GameSnapshot) {
        if self.error.is_some() {
            return;
        }
        let event = Event { event, snapshot };
        let written = serde_json::to_writer(&mut self.out, &event)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = written {
            warn!(error = %e, "Failed to write JSON event");
            self.error = Some(e);
        }
    }
}

impl<W: Write> EventSink for JsonObserver<W> {
    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: Write> GameObserver for JsonObserver<W> {
    fn on_start(&mut self, snapshot: &GameSnapshot) {
        self.emit(EventKind::Start, snapshot);
    }

    fn on_update(&mut self, snapshot: &GameSnapshot) {
        self.emit(EventKind::Update, snapshot);
    }

    fn on_end(&mut self, snapshot: &GameSnapshot) {
        self.emit(EventKind::End, snapshot);
    }
}
