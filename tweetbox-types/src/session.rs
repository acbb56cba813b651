use serde::{Deserialize, Serialize};

/// Username sent when the session carries no name
pub const FALLBACK_USERNAME: &str = "Unknown User";

/// Avatar sent and rendered when the session carries no image
pub const FALLBACK_PROFILE_IMAGE: &str = "https://links.papareact.com/gll";

/// Identity fields supplied by the auth provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Read-only session context. A session with no user is still a session;
/// "signed out" is represented by the absence of a `Session` altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn for_user(name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            user: Some(SessionUser {
                name: Some(name.into()),
                image,
            }),
        }
    }

    /// Display name, falling back to [`FALLBACK_USERNAME`]
    pub fn username(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_USERNAME)
    }

    /// Avatar URL, falling back to [`FALLBACK_PROFILE_IMAGE`]
    pub fn profile_image(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.image.as_deref())
            .filter(|image| !image.is_empty())
            .unwrap_or(FALLBACK_PROFILE_IMAGE)
    }
}

/// Identity for an optional session, with the same fallbacks as [`Session`]
pub fn identity(session: Option<&Session>) -> (&str, &str) {
    match session {
        Some(s) => (s.username(), s.profile_image()),
        None => (FALLBACK_USERNAME, FALLBACK_PROFILE_IMAGE),
    }
}
