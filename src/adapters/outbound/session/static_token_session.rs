use crate::ports::outbound::{AccessToken, SessionProvider, SessionStatus};

/// StaticTokenSession adapter for a credential fixed at startup
///
/// The CLI has no interactive sign-in: the session is authenticated when a
/// token was configured and unauthenticated otherwise. It never reports
/// `Loading`.
pub struct StaticTokenSession {
    token: Option<AccessToken>,
}

impl StaticTokenSession {
    pub fn new(token: Option<AccessToken>) -> Self {
        Self { token }
    }

    /// Builds a session from a raw token value; blank values count as missing
    pub fn from_parts(scheme: &str, value: Option<&str>) -> Self {
        let token = value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| AccessToken::new(scheme, value));
        Self::new(token)
    }
}

impl SessionProvider for StaticTokenSession {
    fn status(&self) -> SessionStatus {
        match &self.token {
            Some(token) => SessionStatus::Authenticated(token.clone()),
            None => SessionStatus::Unauthenticated,
        }
    }

    fn request_sign_in(&self) {
        log::warn!("No SW360 access token configured; pass --token or set SW360_TOKEN");
    }
}
