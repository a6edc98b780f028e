//! Frontend seam.
//!
//! A [`Driver`] supplies input events and draws frames. Network clients are
//! not part of it: [`crate::Runtime`] owns those, so a driver only has to
//! deal with the screen and the keyboard.

use std::future::Future;

use crate::{App, AppEvent};

/// Input and output for one frontend.
///
/// The terminal client reads crossterm events and draws with ratatui; tests
/// replay a fixed event script and record the screens they were asked to
/// draw.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for input.
    ///
    /// `Ok(None)` means the wait ended without anything for the app. The
    /// runtime drops this future when a request result arrives first, so an
    /// event must not be consumed before the future resolves.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Hand the screen back. Called once when the loop exits.
    fn stop(&mut self);
}
