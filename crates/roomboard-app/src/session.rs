//! Session status.
//!
//! The session is owned by the auth service; the application only reads it.
//! It is passed into [`crate::App`] explicitly and updated through
//! [`crate::AppEvent`]s, never looked up ambiently.

use std::fmt;

use roomboard_client::AuthSession;

/// Authentication state as seen by the client.
#[derive(Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Still resolving (e.g. restoring a stored session).
    Loading,
    /// Signed in.
    Authenticated {
        /// Authenticated user identifier.
        user_id: String,
        /// Bearer token for the data API, if one was issued.
        access_token: Option<String>,
    },
    /// Signed out.
    Unauthenticated,
}

impl SessionStatus {
    /// Status is still being resolved.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// A user is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Signed-in user id. `None` unless authenticated.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Authenticated { user_id, .. } => Some(user_id),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    /// Bearer token. `None` unless authenticated with a token.
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { access_token, .. } => access_token.as_deref(),
            Self::Loading | Self::Unauthenticated => None,
        }
    }
}

impl From<AuthSession> for SessionStatus {
    fn from(session: AuthSession) -> Self {
        Self::Authenticated { user_id: session.user_id, access_token: Some(session.access_token) }
    }
}

impl fmt::Debug for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading"),
            Self::Authenticated { user_id, access_token } => f
                .debug_struct("Authenticated")
                .field("user_id", user_id)
                .field("has_token", &access_token.is_some())
                .finish(),
            Self::Unauthenticated => f.write_str("Unauthenticated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_variant() {
        assert!(SessionStatus::Loading.is_loading());
        assert!(SessionStatus::Loading.user_id().is_none());
        assert!(!SessionStatus::Unauthenticated.is_authenticated());

        let status = SessionStatus::from(AuthSession {
            user_id: "user123".into(),
            access_token: "jwt".into(),
        });
        assert!(status.is_authenticated());
        assert_eq!(status.user_id(), Some("user123"));
        assert_eq!(status.access_token(), Some("jwt"));
    }

    #[test]
    fn debug_hides_token() {
        let status =
            SessionStatus::Authenticated { user_id: "u".into(), access_token: Some("jwt".into()) };
        assert!(!format!("{status:?}").contains("jwt"));
    }
}
