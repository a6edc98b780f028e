//! Application layer for Roomboard
//!
//! Pure state machines and generic runtime for the room board, enabling
//! deterministic testing with the same code that runs in production.
//!
//! # Components
//!
//! - [`App`]: UI state machine (routing, gating, input handling)
//! - [`Board`]: Room board controller (query, create, comment, refetch)
//! - [`SignInForm`]: Email/password form
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver and the clients
//!
//! Pure helpers ([`format_relative`], [`validation`], [`gate`]) have no state
//! and are usable on their own.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod board;
mod driver;
mod error_slot;
mod event;
mod feedback;
mod gate;
mod input;
mod route;
mod runtime;
mod session;
mod signin;
mod state;
mod timeago;
pub mod validation;

pub use action::AppAction;
pub use app::{App, Screen};
pub use board::{
    Board, BoardFocus, COMMENT_FAILED, COMMENT_NEEDS_AUTH, CREATE_FAILED, CREATE_NEEDS_AUTH,
    LOADING_ROOMS,
};
pub use driver::Driver;
pub use error_slot::{ErrorSlots, ErrorSource, ShownError};
pub use event::AppEvent;
pub use feedback::{FEEDBACK_ENTRIES, FeedbackEntry};
pub use gate::{Gated, LOADING_LABEL, gate, guard};
pub use input::{KeyInput, TextInput};
pub use route::Route;
pub use runtime::Runtime;
pub use session::SessionStatus;
pub use signin::{MISSING_FIELDS, SignInField, SignInForm, VERIFY_EMAIL_NOTICE};
pub use state::{LoadState, Message, Room, ThreadRefresh, rooms_from_records};
pub use timeago::format_relative;
pub use validation::{is_valid_comment, is_valid_room_name};
