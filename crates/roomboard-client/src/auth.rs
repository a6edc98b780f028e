//! Hosted authentication transport.
//!
//! Talks to the email/password endpoints of the hosted auth service. Session
//! persistence and token refresh stay with the service; this client only
//! exchanges credentials for an access token and a user id.

use std::time::Duration;

use serde::Deserialize;

use crate::{AuthApi, AuthError, AuthSession, Credentials};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionPayload {
    access_token: String,
    user: UserPayload,
}

#[derive(Deserialize)]
struct UserPayload {
    id: String,
}

#[derive(Deserialize)]
struct SessionEnvelope {
    #[serde(default)]
    session: Option<SessionPayload>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

impl From<SessionPayload> for AuthSession {
    fn from(payload: SessionPayload) -> Self {
        Self { user_id: payload.user.id, access_token: payload.access_token }
    }
}

/// Client for the hosted auth service.
#[derive(Debug, Clone)]
pub struct HostedAuth {
    http: reqwest::Client,
    base_url: String,
}

impl HostedAuth {
    /// Create a client rooted at `base_url` (e.g. `https://<app>.auth.<region>.nhost.run/v1`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    async fn post(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<Option<AuthSession>, AuthError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, email = %credentials.email, "auth request");

        let response = self.http.post(&url).json(credentials).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            tracing::warn!(%status, %message, "auth request rejected");
            return Err(AuthError::Rejected { status: status.as_u16(), message });
        }

        decode_session(&body)
    }
}

/// Decode a sign-in/sign-up success body.
fn decode_session(body: &[u8]) -> Result<Option<AuthSession>, AuthError> {
    let envelope: SessionEnvelope =
        serde_json::from_slice(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    Ok(envelope.session.map(AuthSession::from))
}

impl AuthApi for HostedAuth {
    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        self.post("/signin/email-password", credentials)
            .await?
            .ok_or_else(|| AuthError::Decode("sign-in response has no session".to_string()))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<AuthSession>, AuthError> {
        self.post("/signup/email-password", credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_body_decodes() {
        let body = br#"{"session":{"accessToken":"jwt","accessTokenExpiresIn":900,"refreshToken":"r","user":{"id":"user123","email":"a@b.c"}},"mfa":null}"#;
        let session = decode_session(body).unwrap().unwrap();
        assert_eq!(session.user_id, "user123");
        assert_eq!(session.access_token, "jwt");
    }

    #[test]
    fn null_session_decodes_as_none() {
        assert!(decode_session(br#"{"session":null}"#).unwrap().is_none());
        assert!(decode_session(b"{}").unwrap().is_none());
    }

    #[test]
    fn malformed_body_is_decode_error() {
        assert!(matches!(decode_session(b"not json"), Err(AuthError::Decode(_))));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let auth = HostedAuth::new("https://auth.example/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(auth.base_url, "https://auth.example/v1");
    }
}
