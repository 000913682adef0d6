use crate::authentication::credentials::{validate_credentials, AdminCredentials, AuthError, Credentials};
use secrecy::Secret;

/// Gate in front of tip writes and subscriber statistics.
///
/// Starts logged out, flips to authenticated on a matching credential pair and
/// back on logout. There is no expiry and no token.
pub struct AdminSession {
    credentials: AdminCredentials,
    authenticated: bool,
}

impl AdminSession {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self::restore(credentials, false)
    }

    /// Rebuild a session from a previously persisted flag.
    pub fn restore(credentials: AdminCredentials, authenticated: bool) -> Self {
        Self {
            credentials,
            authenticated,
        }
    }

    /// `false` leaves the current state untouched.
    pub fn login(&mut self, username: &str, password: Secret<String>) -> bool {
        let attempt = Credentials {
            username: username.to_string(),
            password,
        };
        match validate_credentials(&attempt, &self.credentials) {
            Ok(()) => {
                self.authenticated = true;
                true
            }
            Err(AuthError::InvalidCredentials(e)) => {
                tracing::info!(error.message = %e, "Admin login rejected");
                false
            }
            Err(AuthError::UnexpectedError(e)) => {
                tracing::error!(error.cause_chain = ?e, "Admin login failed");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
