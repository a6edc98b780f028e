//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Run the rooms+messages query.
    FetchRooms,

    /// Issue the create-room mutation.
    CreateRoom {
        /// Trimmed room name.
        name: String,
    },

    /// Issue the add-comment mutation.
    AddComment {
        /// Target room.
        room_id: String,
        /// Trimmed comment text.
        content: String,
    },

    /// Sign in with email and password.
    SignIn {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },

    /// Register a new account.
    SignUp {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },
}
