//! Wire records.
//!
//! Shapes returned by the GraphQL backend and the hosted auth service. Field
//! names follow the backend schema (`snake_case` columns), so no renaming is
//! needed on the GraphQL side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A room as returned by `GetRoomsWithMessages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Opaque room identifier (uuid on the backend).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Owning user.
    pub user_id: String,
    /// Messages in backend order.
    #[serde(default)]
    pub messages: Vec<MessageRecord>,
}

/// A message as returned by the query and by `AddCommentToRoom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Opaque message identifier.
    pub id: String,
    /// Text content.
    pub content: String,
    /// Author.
    pub user_id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Owning room. Omitted by some selections.
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Result of `CreateRoom`.
///
/// The identifier is optional on the wire: a success response without it is
/// treated as a failure by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRoom {
    /// New room identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Echoed room name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Result of `DeleteRoom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRoom {
    /// Identifier of the deleted room.
    pub id: String,
}

/// Email/password pair submitted to the auth service.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Build credentials from an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).finish_non_exhaustive()
    }
}

/// An authenticated session issued by the auth service.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Authenticated user identifier.
    pub user_id: String,
    /// Bearer token for the GraphQL endpoint.
    pub access_token: String,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession").field("user_id", &self.user_id).finish_non_exhaustive()
    }
}
