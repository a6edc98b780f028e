//! Input validation for board actions.
//!
//! Pure checks run before any mutation is issued. The duplicate-name check
//! only sees the rooms currently loaded; uniqueness is not enforced by the
//! backend.

use crate::Room;

/// Why a room name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomNameError {
    /// Blank after trimming.
    Empty,
    /// Matches a loaded room name, ignoring case.
    Duplicate,
}

impl RoomNameError {
    /// User-facing message.
    pub fn message(self) -> &'static str {
        match self {
            Self::Empty => "Por favor, insira um nome para a sala.",
            Self::Duplicate => "Já existe uma sala com este nome.",
        }
    }
}

/// Why a comment was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentError {
    /// Blank after trimming.
    Empty,
    /// No thread is open.
    NoRoomSelected,
}

impl CommentError {
    /// User-facing message. Both cases share one message.
    pub fn message(self) -> &'static str {
        "Por favor, insira um comentário."
    }
}

/// Check a room name against the loaded rooms. Returns the trimmed name.
pub fn check_room_name<'a>(name: &'a str, rooms: &[Room]) -> Result<&'a str, RoomNameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RoomNameError::Empty);
    }

    let wanted = trimmed.to_lowercase();
    if rooms.iter().any(|room| room.name.to_lowercase() == wanted) {
        return Err(RoomNameError::Duplicate);
    }

    Ok(trimmed)
}

/// Check comment text against the current selection. Returns the trimmed text.
pub fn check_comment<'a>(text: &'a str, selected: Option<&Room>) -> Result<&'a str, CommentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CommentError::Empty);
    }
    if selected.is_none() {
        return Err(CommentError::NoRoomSelected);
    }
    Ok(trimmed)
}

/// `true` iff `name` is non-blank and not a case-insensitive duplicate.
pub fn is_valid_room_name(name: &str, rooms: &[Room]) -> bool {
    check_room_name(name, rooms).is_ok()
}

/// `true` iff `text` is non-blank and a room is selected.
pub fn is_valid_comment(text: &str, selected: Option<&Room>) -> bool {
    check_comment(text, selected).is_ok()
}
