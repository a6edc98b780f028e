//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (Keyboard, Resize) and system ticks.
//! - Results of network actions, fed back by the [`crate::Runtime`].

use roomboard_client::AuthSession;

use crate::{KeyInput, Room, SessionStatus};

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Interrupt requested or input closed.
    Shutdown,

    /// Session status changed outside a sign-in attempt.
    SessionResolved(SessionStatus),

    /// Sign-in or sign-up produced a session.
    SignedIn(AuthSession),

    /// Sign-up succeeded without a session (verification pending).
    SignUpPending,

    /// Sign-in or sign-up was rejected.
    AuthFailed {
        /// Provider-supplied reason.
        message: String,
    },

    /// Rooms query succeeded.
    RoomsLoaded {
        /// Fresh snapshot in backend order.
        rooms: Vec<Room>,
    },

    /// Rooms query failed.
    RoomsFailed {
        /// Transport-provided reason.
        message: String,
    },

    /// Create-room mutation answered.
    RoomCreated {
        /// New room id. `None` if the response carried no room.
        room_id: Option<String>,
    },

    /// Create-room mutation failed in transport.
    RoomCreateFailed {
        /// Transport-provided reason.
        message: String,
    },

    /// Add-comment mutation answered.
    CommentAdded {
        /// New message id. `None` if the response carried no message.
        message_id: Option<String>,
    },

    /// Add-comment mutation failed in transport.
    CommentFailed {
        /// Transport-provided reason.
        message: String,
    },
}
