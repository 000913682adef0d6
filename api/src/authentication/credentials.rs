use crate::utils::error_chain_fmt;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

#[derive(thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials.")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// What somebody typed into the login form.
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

/// The single admin account, injected from configuration.
#[derive(Deserialize, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: Secret<String>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The error never says which of the two fields was wrong.
#[tracing::instrument(name = "Validate credentials", skip(credentials, expected))]
pub fn validate_credentials(
    credentials: &Credentials,
    expected: &AdminCredentials,
) -> Result<(), AuthError> {
    let username_matches = credentials.username == expected.username;
    let password_matches =
        credentials.password.expose_secret() == expected.password.expose_secret();

    if username_matches && password_matches {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials(anyhow::anyhow!(
            "Unknown username or wrong password."
        )))
    }
}
