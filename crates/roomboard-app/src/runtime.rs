//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`RoomsApi`] and [`AuthApi`]: injected data and auth clients
//! - [`Driver`]: Platform-specific I/O
//!
//! Network actions run on their own tasks. Their results come back over a
//! channel and are fed into the App as events, so the screen keeps drawing and
//! input keeps flowing while a request is in flight. Transport failures are
//! logged and surfaced as events; they never stop the loop.

use roomboard_client::{AuthApi, Credentials, RoomsApi};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{App, AppAction, AppEvent, Driver, rooms_from_records};

/// Generic runtime that orchestrates App, clients, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `R`: Rooms and messages backend, cloned into each request task
/// - `A`: Authentication backend, cloned into each request task
pub struct Runtime<D, R, A>
where
    D: Driver,
    R: RoomsApi,
    A: AuthApi,
{
    driver: D,
    app: App,
    rooms: R,
    auth: A,
    /// Token last handed to `rooms`.
    access_token: Option<String>,
    results_tx: mpsc::UnboundedSender<AppEvent>,
    results_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<D, R, A> Runtime<D, R, A>
where
    D: Driver,
    R: RoomsApi + Clone + Sync + 'static,
    A: AuthApi + Clone + Sync + 'static,
{
    /// Create a new runtime. The rooms client picks up the token of the
    /// App's current session.
    pub fn new(driver: D, app: App, mut rooms: R, auth: A) -> Self {
        let access_token = app.session().access_token().map(str::to_owned);
        rooms.set_access_token(access_token.clone());
        let (results_tx, results_rx) = mpsc::unbounded_channel();

        Self { driver, app, rooms, auth, access_token, results_tx, results_rx }
    }

    /// Run the main event loop until the App quits.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let actions = self.app.start();
        let mut quit = self.process_actions(actions)?;

        while !quit {
            let event = tokio::select! {
                biased;

                // Results of requests started earlier
                Some(event) = self.results_rx.recv() => event,

                // Input
                polled = self.driver.poll_event() => match polled? {
                    Some(event) => event,
                    None => continue,
                },
            };
            quit = self.dispatch(event)?;
        }

        self.driver.stop();
        Ok(())
    }

    /// Feed one event to the App and carry out what it asks for.
    ///
    /// Returns `true` if should quit.
    fn dispatch(&mut self, event: AppEvent) -> Result<bool, D::Error> {
        let actions = self.app.handle(event);
        self.sync_access_token();
        self.process_actions(actions)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::FetchRooms
                | AppAction::CreateRoom { .. }
                | AppAction::AddComment { .. }
                | AppAction::SignIn { .. }
                | AppAction::SignUp { .. } => self.spawn_request(action),
            }
        }
        Ok(false)
    }

    /// Hand the session's token to the rooms client whenever it changes.
    ///
    /// Runs before the actions of the same event are processed, so a fetch
    /// issued on sign-in already carries the new token.
    fn sync_access_token(&mut self) {
        let token = self.app.session().access_token();
        if token == self.access_token.as_deref() {
            return;
        }

        debug!(authenticated = token.is_some(), "access token changed");
        self.access_token = token.map(str::to_owned);
        self.rooms.set_access_token(self.access_token.clone());
    }

    /// Start a network action on its own task.
    fn spawn_request(&self, action: AppAction) {
        debug!(request = request_name(&action), "starting request");

        let rooms = self.rooms.clone();
        let auth = self.auth.clone();
        let results = self.results_tx.clone();
        tokio::spawn(async move {
            let event = execute(&rooms, &auth, action).await;
            // Receiver is gone once the loop has exited
            let _ = results.send(event);
        });
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

/// Log-safe name of a network action. Credentials stay out of the logs.
fn request_name(action: &AppAction) -> &'static str {
    match action {
        AppAction::FetchRooms => "GetRoomsWithMessages",
        AppAction::CreateRoom { .. } => "CreateRoom",
        AppAction::AddComment { .. } => "AddCommentToRoom",
        AppAction::SignIn { .. } => "sign-in",
        AppAction::SignUp { .. } => "sign-up",
        AppAction::Render | AppAction::Quit => "none",
    }
}

/// Execute a network action and translate the result into an event.
async fn execute<R, A>(rooms: &R, auth: &A, action: AppAction) -> AppEvent
where
    R: RoomsApi + Sync,
    A: AuthApi + Sync,
{
    match action {
        AppAction::FetchRooms => match rooms.rooms_with_messages().await {
            Ok(records) => AppEvent::RoomsLoaded { rooms: rooms_from_records(records) },
            Err(e) => {
                warn!(error = %e, "rooms query failed");
                AppEvent::RoomsFailed { message: e.to_string() }
            },
        },
        AppAction::CreateRoom { name } => match rooms.create_room(&name).await {
            Ok(created) => AppEvent::RoomCreated { room_id: created.and_then(|room| room.id) },
            Err(e) => {
                warn!(error = %e, %name, "create room failed");
                AppEvent::RoomCreateFailed { message: e.to_string() }
            },
        },
        AppAction::AddComment { room_id, content } => {
            match rooms.add_comment(&room_id, &content).await {
                Ok(message) => AppEvent::CommentAdded { message_id: message.map(|m| m.id) },
                Err(e) => {
                    warn!(error = %e, %room_id, "add comment failed");
                    AppEvent::CommentFailed { message: e.to_string() }
                },
            }
        },
        AppAction::SignIn { email, password } => {
            let credentials = Credentials::new(email, password);
            match auth.sign_in(&credentials).await {
                Ok(session) => AppEvent::SignedIn(session),
                Err(e) => {
                    warn!(error = %e, "sign-in failed");
                    AppEvent::AuthFailed { message: e.to_string() }
                },
            }
        },
        AppAction::SignUp { email, password } => {
            let credentials = Credentials::new(email, password);
            match auth.sign_up(&credentials).await {
                Ok(Some(session)) => AppEvent::SignedIn(session),
                Ok(None) => {
                    info!("sign-up pending verification");
                    AppEvent::SignUpPending
                },
                Err(e) => {
                    warn!(error = %e, "sign-up failed");
                    AppEvent::AuthFailed { message: e.to_string() }
                },
            }
        },
        // Not network actions
        AppAction::Render | AppAction::Quit => AppEvent::Tick,
    }
}
