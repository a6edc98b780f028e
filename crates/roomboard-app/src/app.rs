//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the application completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Holds the session status handed in by the runtime.
//! - Routes between `/`, `/rooms` and `/feedback`, gating protected routes.
//! - Mounts the [`Board`] when `/rooms` becomes visible.
//! - Stores terminal dimensions to handle resize events.

use tracing::info;

use crate::{
    AppAction, AppEvent, Board, Gated, KeyInput, Route, SessionStatus, SignInForm, ThreadRefresh,
    guard,
};

/// What the frontend should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Session still resolving on a protected route.
    Loading,
    /// Sign-in form.
    SignIn,
    /// Room board.
    Rooms,
    /// Feedback list.
    Feedback,
}

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Session status, owned by the auth service.
    session: SessionStatus,
    /// Current route, after gating.
    route: Route,
    /// Board state. Reset on every mount.
    board: Board,
    /// Board is mounted (route is `/rooms` and the gate renders it).
    board_mounted: bool,
    /// Sign-in form.
    sign_in: SignInForm,
    /// Open-thread refresh policy for new boards.
    refresh: ThreadRefresh,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create an App on `/` with the given session status.
    pub fn new(session: SessionStatus, refresh: ThreadRefresh) -> Self {
        Self {
            session,
            route: Route::SignIn,
            board: Board::new(refresh),
            board_mounted: false,
            sign_in: SignInForm::new(),
            refresh,
            terminal_size: (80, 24),
        }
    }

    /// Initial navigation: the board unless the user is known to be signed out.
    pub fn start(&mut self) -> Vec<AppAction> {
        match self.session {
            SessionStatus::Unauthenticated => self.navigate(Route::SignIn),
            SessionStatus::Loading | SessionStatus::Authenticated { .. } => {
                self.navigate(Route::Rooms)
            },
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Shutdown => vec![AppAction::Quit],
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::SessionResolved(session) => {
                self.session = session;
                self.navigate(self.route)
            },
            AppEvent::SignedIn(session) => {
                info!(user_id = %session.user_id, "signed in");
                self.session = session.into();
                self.sign_in.signed_in();
                self.navigate(Route::Rooms)
            },
            AppEvent::SignUpPending => {
                self.sign_in.sign_up_pending();
                vec![AppAction::Render]
            },
            AppEvent::AuthFailed { message } => {
                self.sign_in.auth_failed(message);
                vec![AppAction::Render]
            },
            AppEvent::RoomsLoaded { rooms } if self.board_mounted => self.board.rooms_loaded(rooms),
            AppEvent::RoomsFailed { message } if self.board_mounted => {
                self.board.rooms_failed(message)
            },
            AppEvent::RoomCreated { room_id } if self.board_mounted => {
                self.board.room_created(room_id)
            },
            AppEvent::RoomCreateFailed { message } if self.board_mounted => {
                self.board.room_create_failed(&message)
            },
            AppEvent::CommentAdded { message_id } if self.board_mounted => {
                self.board.comment_added(message_id)
            },
            AppEvent::CommentFailed { message } if self.board_mounted => {
                self.board.comment_failed(&message)
            },
            // Results for a board that has since been unmounted
            AppEvent::RoomsLoaded { .. }
            | AppEvent::RoomsFailed { .. }
            | AppEvent::RoomCreated { .. }
            | AppEvent::RoomCreateFailed { .. }
            | AppEvent::CommentAdded { .. }
            | AppEvent::CommentFailed { .. } => vec![],
        }
    }

    /// Navigate to `route`, redirecting through the authentication gate.
    pub fn navigate(&mut self, route: Route) -> Vec<AppAction> {
        let target = match guard(route, &self.session) {
            Gated::Redirect(to) => to,
            Gated::Loading | Gated::Render(_) => route,
        };
        if target != self.route {
            info!(from = %self.route, to = %target, "navigate");
        }
        self.route = target;

        let mut actions = self.sync_board();
        if actions.is_empty() {
            actions.push(AppAction::Render);
        }
        actions
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Screen to draw, re-evaluating the gate.
    pub fn screen(&self) -> Screen {
        match guard(self.route, &self.session) {
            Gated::Loading => Screen::Loading,
            Gated::Redirect(_) | Gated::Render(Route::SignIn) => Screen::SignIn,
            Gated::Render(Route::Rooms) => Screen::Rooms,
            Gated::Render(Route::Feedback) => Screen::Feedback,
        }
    }

    /// Session status.
    pub fn session(&self) -> &SessionStatus {
        &self.session
    }

    /// Current route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board is mounted.
    pub fn is_board_mounted(&self) -> bool {
        self.board_mounted
    }

    /// Sign-in form state.
    pub fn sign_in(&self) -> &SignInForm {
        &self.sign_in
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match self.screen() {
            Screen::Loading => match key {
                KeyInput::Esc => self.quit(),
                _ => vec![],
            },
            Screen::SignIn => match key {
                KeyInput::Esc => self.quit(),
                _ => self.sign_in.handle_key(key),
            },
            Screen::Feedback => match key {
                KeyInput::Esc | KeyInput::F(2) => self.navigate(Route::Rooms),
                _ => vec![],
            },
            Screen::Rooms => match key {
                KeyInput::F(2) => self.navigate(Route::Feedback),
                _ => self.board.handle_key(key, self.session.user_id()),
            },
        }
    }

    /// Mount or unmount the board to match the current route and session.
    fn sync_board(&mut self) -> Vec<AppAction> {
        let visible = self.route == Route::Rooms && self.session.is_authenticated();
        match (visible, self.board_mounted) {
            (true, false) => {
                self.board = Board::new(self.refresh);
                self.board_mounted = true;
                self.board.mount()
            },
            (false, true) => {
                self.board_mounted = false;
                vec![]
            },
            _ => vec![],
        }
    }
}
