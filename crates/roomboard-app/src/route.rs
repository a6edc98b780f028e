//! Application routes.

use std::fmt;

/// Screens reachable by path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: sign-in and registration. Public.
    #[default]
    SignIn,
    /// `/rooms`: the room board.
    Rooms,
    /// `/feedback`: static feedback list.
    Feedback,
}

impl Route {
    /// URL-style path.
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/",
            Self::Rooms => "/rooms",
            Self::Feedback => "/feedback",
        }
    }

    /// Requires an authenticated session.
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::SignIn)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
