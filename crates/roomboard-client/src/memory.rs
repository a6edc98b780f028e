//! In-memory backend with fault injection.
//!
//! Implements both [`RoomsApi`] and [`AuthApi`] against process-local state so
//! the application can run without a network and tests can script backend
//! behavior. Faults are queued and consumed by the first matching call.

#![allow(clippy::disallowed_types, reason = "Synchronous in-memory operations only")]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    ApiError, AuthApi, AuthError, AuthSession, CreatedRoom, Credentials, DeletedRoom,
    MessageRecord, RoomRecord, RoomsApi,
};

const TOKEN_PREFIX: &str = "memory:";

/// A scripted backend failure, consumed by the next matching call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Next rooms fetch fails with this message.
    FetchFails(String),
    /// Next room creation fails with this message.
    CreateFails(String),
    /// Next room creation succeeds but returns no room object.
    CreateOmitsPayload,
    /// Next comment fails with this message.
    CommentFails(String),
    /// Next comment succeeds but returns no message object.
    CommentOmitsPayload,
    /// Next sign-in is rejected with this message.
    SignInFails(String),
    /// Next sign-up creates the account without issuing a session.
    SignUpPending,
}

/// Per-operation call counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    /// `rooms_with_messages` calls.
    pub fetches: usize,
    /// `create_room` calls.
    pub creates: usize,
    /// `add_comment` calls.
    pub comments: usize,
    /// `delete_room` calls.
    pub deletes: usize,
}

#[derive(Default)]
struct Inner {
    rooms: Vec<RoomRecord>,
    faults: Vec<Fault>,
    calls: CallCounts,
    current_user: Option<String>,
}

impl Inner {
    /// Remove and return the first queued fault matching `pred`.
    fn take_fault(&mut self, pred: impl Fn(&Fault) -> bool) -> Option<Fault> {
        let idx = self.faults.iter().position(pred)?;
        Some(self.faults.remove(idx))
    }

    fn author(&self) -> Result<String, ApiError> {
        self.current_user
            .clone()
            .ok_or_else(|| ApiError::Graphql("missing 'Authorization' header".to_string()))
    }
}

/// Process-local backend.
///
/// Clones share state, so one instance can serve as both the rooms API and
/// the auth API of a runtime while a test keeps a handle for assertions.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend seeded with rooms.
    pub fn with_rooms(rooms: Vec<RoomRecord>) -> Self {
        let backend = Self::new();
        backend.state().rooms = rooms;
        backend
    }

    /// Queue a fault for a later call.
    pub fn inject(&self, fault: Fault) {
        self.state().faults.push(fault);
    }

    /// Snapshot of stored rooms.
    pub fn rooms(&self) -> Vec<RoomRecord> {
        self.state().rooms.clone()
    }

    /// Calls made so far.
    pub fn calls(&self) -> CallCounts {
        self.state().calls
    }

    /// User the backend attributes mutations to.
    pub fn current_user(&self) -> Option<String> {
        self.state().current_user.clone()
    }

    fn state(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue_session(email: &str) -> AuthSession {
        let user_id = format!("user-{email}");
        AuthSession { access_token: format!("{TOKEN_PREFIX}{user_id}"), user_id }
    }
}

impl RoomsApi for MemoryBackend {
    async fn rooms_with_messages(&self) -> Result<Vec<RoomRecord>, ApiError> {
        let mut inner = self.state();
        inner.calls.fetches += 1;

        if let Some(Fault::FetchFails(message)) =
            inner.take_fault(|f| matches!(f, Fault::FetchFails(_)))
        {
            return Err(ApiError::Unavailable(message));
        }
        Ok(inner.rooms.clone())
    }

    async fn create_room(&self, name: &str) -> Result<Option<CreatedRoom>, ApiError> {
        let mut inner = self.state();
        inner.calls.creates += 1;

        match inner.take_fault(|f| matches!(f, Fault::CreateFails(_) | Fault::CreateOmitsPayload)) {
            Some(Fault::CreateFails(message)) => return Err(ApiError::Unavailable(message)),
            Some(_) => return Ok(None),
            None => {},
        }

        let user_id = inner.author()?;
        let id = Uuid::new_v4().to_string();
        inner.rooms.push(RoomRecord {
            id: id.clone(),
            name: name.to_string(),
            created_at: Utc::now(),
            user_id,
            messages: Vec::new(),
        });

        Ok(Some(CreatedRoom { id: Some(id), name: Some(name.to_string()) }))
    }

    async fn add_comment(
        &self,
        room_id: &str,
        content: &str,
    ) -> Result<Option<MessageRecord>, ApiError> {
        let mut inner = self.state();
        inner.calls.comments += 1;

        match inner.take_fault(|f| matches!(f, Fault::CommentFails(_) | Fault::CommentOmitsPayload))
        {
            Some(Fault::CommentFails(message)) => return Err(ApiError::Unavailable(message)),
            Some(_) => return Ok(None),
            None => {},
        }

        let user_id = inner.author()?;
        let Some(room) = inner.rooms.iter_mut().find(|r| r.id == room_id) else {
            return Err(ApiError::Graphql(format!(
                "Foreign key violation. insert or update on table \"messages\" \
                 violates foreign key constraint (room {room_id})"
            )));
        };

        let message = MessageRecord {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            user_id,
            created_at: Utc::now(),
            room_id: Some(room_id.to_string()),
        };
        room.messages.push(message.clone());

        Ok(Some(message))
    }

    async fn delete_room(&self, id: &str) -> Result<Option<DeletedRoom>, ApiError> {
        let mut inner = self.state();
        inner.calls.deletes += 1;

        let before = inner.rooms.len();
        inner.rooms.retain(|r| r.id != id);
        Ok((inner.rooms.len() < before).then(|| DeletedRoom { id: id.to_string() }))
    }

    fn set_access_token(&mut self, token: Option<String>) {
        self.state().current_user =
            token.and_then(|t| t.strip_prefix(TOKEN_PREFIX).map(str::to_string));
    }
}

impl AuthApi for MemoryBackend {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        let mut inner = self.state();

        if let Some(Fault::SignInFails(message)) =
            inner.take_fault(|f| matches!(f, Fault::SignInFails(_)))
        {
            return Err(AuthError::Rejected { status: 401, message });
        }
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::Rejected {
                status: 400,
                message: "Incorrect email or password".to_string(),
            });
        }

        Ok(Self::issue_session(credentials.email.trim()))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<AuthSession>, AuthError> {
        let mut inner = self.state();

        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(AuthError::Rejected {
                status: 400,
                message: "Email and password are required".to_string(),
            });
        }
        if inner.take_fault(|f| matches!(f, Fault::SignUpPending)).is_some() {
            return Ok(None);
        }

        Ok(Some(Self::issue_session(credentials.email.trim())))
    }
}
