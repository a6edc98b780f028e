//! Observable application state types.
//!
//! These structures serve as the "View Model" for the board. They are derived
//! from the latest [`roomboard_client::RoomRecord`] snapshot and carry only
//! what the UI renders.

use chrono::{DateTime, Utc};
use roomboard_client::{MessageRecord, RoomRecord};

/// Characters of the author id shown in message headers.
const AUTHOR_ID_PREFIX: usize = 8;

/// A room with its messages, in backend order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Opaque room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Owning user.
    pub user_id: String,
    /// Messages, never re-sorted client-side.
    pub messages: Vec<Message>,
}

/// A comment in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Opaque message identifier.
    pub id: String,
    /// Text content.
    pub content: String,
    /// Author.
    pub user_id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Owning room, when the backend included it.
    pub room_id: Option<String>,
}

impl Message {
    /// Header label for the author ("Usuário " plus the id prefix).
    pub fn author_label(&self) -> String {
        let prefix: String = self.user_id.chars().take(AUTHOR_ID_PREFIX).collect();
        format!("Usuário {prefix}")
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id,
            content: record.content,
            user_id: record.user_id,
            created_at: record.created_at,
            room_id: record.room_id,
        }
    }
}

impl From<RoomRecord> for Room {
    fn from(record: RoomRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
            user_id: record.user_id,
            messages: record.messages.into_iter().map(Message::from).collect(),
        }
    }
}

/// Map a query response into the view model, preserving order.
pub fn rooms_from_records(records: Vec<RoomRecord>) -> Vec<Room> {
    records.into_iter().map(Room::from).collect()
}

/// Status of the rooms query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// First fetch in flight; nothing to show yet.
    #[default]
    Loading,
    /// Last fetch succeeded.
    Ready,
    /// Last fetch failed; the board shows only this message.
    Failed {
        /// Transport-provided reason.
        message: String,
    },
}

/// How the open thread reacts to a refetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThreadRefresh {
    /// Keep the snapshot taken when the thread was opened. A comment added
    /// from the thread shows up only after re-opening it.
    #[default]
    Stale,
    /// Replace the open thread with the refreshed room of the same id.
    Follow,
}
