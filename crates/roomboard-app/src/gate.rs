//! Authentication gate for protected views.
//!
//! Evaluated on every render; there is no retry and no side effect other
//! than navigation.

use crate::{Route, SessionStatus};

/// Placeholder shown while the session status resolves.
pub const LOADING_LABEL: &str = "Carregando...";

/// Outcome of gating a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gated<V> {
    /// Session still resolving; render only the loading placeholder.
    Loading,
    /// Authenticated; render the wrapped view.
    Render(V),
    /// Not authenticated; navigate instead of rendering.
    Redirect(Route),
}

/// Gate a protected view on the session status.
pub fn gate<V>(session: &SessionStatus, view: V) -> Gated<V> {
    match session {
        SessionStatus::Loading => Gated::Loading,
        SessionStatus::Authenticated { .. } => Gated::Render(view),
        SessionStatus::Unauthenticated => Gated::Redirect(Route::SignIn),
    }
}

/// Gate navigation to `route`. Public routes always render.
pub fn guard(route: Route, session: &SessionStatus) -> Gated<Route> {
    if route.is_protected() { gate(session, route) } else { Gated::Render(route) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> SessionStatus {
        SessionStatus::Authenticated { user_id: "user123".into(), access_token: None }
    }

    #[test]
    fn loading_blocks_rendering() {
        assert_eq!(gate(&SessionStatus::Loading, "board"), Gated::Loading);
    }

    #[test]
    fn authenticated_renders_view() {
        assert_eq!(gate(&signed_in(), "board"), Gated::Render("board"));
    }

    #[test]
    fn unauthenticated_redirects_to_sign_in() {
        assert_eq!(gate(&SessionStatus::Unauthenticated, "board"), Gated::Redirect(Route::SignIn));
        assert_eq!(
            guard(Route::Feedback, &SessionStatus::Unauthenticated),
            Gated::Redirect(Route::SignIn)
        );
    }

    #[test]
    fn public_route_ignores_session() {
        for session in [SessionStatus::Loading, SessionStatus::Unauthenticated, signed_in()] {
            assert_eq!(guard(Route::SignIn, &session), Gated::Render(Route::SignIn));
        }
    }
}
