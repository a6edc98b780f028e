//! Crossterm/ratatui [`Driver`].
//!
//! Puts the terminal in raw mode on the alternate screen, turns key presses
//! into [`AppEvent`]s and draws every frame through [`crate::ui`]. When no
//! input arrives within [`TICK_MS`] a tick is produced instead.

use std::io::{self, Stdout, stdout};

use chrono::Utc;
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use roomboard_app::{App, AppEvent, Driver, KeyInput};
use thiserror::Error;

use crate::ui;

/// Interval between ticks when no input arrives.
const TICK_MS: u64 = 100;

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Raw mode, screen switch, draw or event read failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Driver owning the process terminal.
///
/// The terminal is restored on [`Driver::stop`] and again on drop, whichever
/// comes first.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    restored: bool,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, restored: false })
    }

    /// Convert a crossterm key event to an [`AppEvent`].
    ///
    /// `Ctrl-C` is an interrupt on every screen.
    pub fn convert_key(key: KeyEvent) -> Option<AppEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(AppEvent::Shutdown);
        }

        let input = match key.code {
            KeyCode::Char(c) => KeyInput::Char(c),
            KeyCode::Enter => KeyInput::Enter,
            KeyCode::Backspace => KeyInput::Backspace,
            KeyCode::Delete => KeyInput::Delete,
            KeyCode::Tab => KeyInput::Tab,
            KeyCode::Esc => KeyInput::Esc,
            KeyCode::Left => KeyInput::Left,
            KeyCode::Right => KeyInput::Right,
            KeyCode::Up => KeyInput::Up,
            KeyCode::Down => KeyInput::Down,
            KeyCode::Home => KeyInput::Home,
            KeyCode::End => KeyInput::End,
            KeyCode::F(n) => KeyInput::F(n),
            _ => return None,
        };
        Some(AppEvent::Key(input))
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        let timeout = tokio::time::Duration::from_millis(TICK_MS);

        tokio::select! {
            biased;

            // Key presses and resizes
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key_event))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => Ok(Some(AppEvent::Resize(cols, rows))),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Ok(Some(AppEvent::Shutdown)),
                    Some(Ok(_)) => Ok(None),
                }
            }

            // Idle
            () = tokio::time::sleep(timeout) => {
                Ok(Some(AppEvent::Tick))
            }
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let now = Utc::now();
        self.terminal.draw(|frame| {
            ui::render(frame, app, now);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore();
    }
}
