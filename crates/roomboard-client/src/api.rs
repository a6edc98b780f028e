//! Data-access traits.
//!
//! The application runtime is generic over these traits so the same
//! orchestration code runs against the real backend and the in-memory one.

use std::future::Future;

use crate::{
    ApiError, AuthError, AuthSession, CreatedRoom, Credentials, DeletedRoom, MessageRecord,
    RoomRecord,
};

/// Rooms and messages backend.
///
/// # Implementations
///
/// - **Remote**: [`crate::GraphqlClient`] over HTTP
/// - **In-process**: [`crate::MemoryBackend`] for demo runs and tests
pub trait RoomsApi: Send {
    /// Fetch every room with its messages (`GetRoomsWithMessages`).
    fn rooms_with_messages(
        &self,
    ) -> impl Future<Output = Result<Vec<RoomRecord>, ApiError>> + Send;

    /// Create a room (`CreateRoom`).
    ///
    /// `Ok(None)` means the backend answered without a room object.
    fn create_room(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<CreatedRoom>, ApiError>> + Send;

    /// Add a comment to a room (`AddCommentToRoom`).
    ///
    /// `Ok(None)` means the backend answered without a message object.
    fn add_comment(
        &self,
        room_id: &str,
        content: &str,
    ) -> impl Future<Output = Result<Option<MessageRecord>, ApiError>> + Send;

    /// Delete a room by id (`DeleteRoom`).
    fn delete_room(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<DeletedRoom>, ApiError>> + Send;

    /// Replace the bearer token sent with subsequent requests.
    fn set_access_token(&mut self, token: Option<String>);
}

/// Hosted authentication service.
pub trait AuthApi: Send {
    /// Sign in with email and password.
    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthSession, AuthError>> + Send;

    /// Register a new account.
    ///
    /// `Ok(None)` means the account was created but no session was issued
    /// (for example while email verification is pending).
    fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Option<AuthSession>, AuthError>> + Send;
}
