use std::fmt;

/// Access credential for the SW360 REST API
///
/// The token value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    scheme: String,
    value: String,
}

impl AccessToken {
    /// Default authorization scheme used by SW360's OAuth endpoints
    pub const DEFAULT_SCHEME: &'static str = "Bearer";

    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            value: value.into(),
        }
    }

    pub fn bearer(value: impl Into<String>) -> Self {
        Self::new(Self::DEFAULT_SCHEME, value)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.value)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("scheme", &self.scheme)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Authentication state reported by the session service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated(AccessToken),
    Unauthenticated,
    Loading,
}

/// SessionProvider port for the authentication gate
///
/// The sign-in protocol itself is external; this port only reports the
/// current state and can be asked to start a sign-in.
pub trait SessionProvider {
    /// Current authentication state
    fn status(&self) -> SessionStatus;

    /// Asks the session service to start its sign-in flow
    fn request_sign_in(&self);
}
