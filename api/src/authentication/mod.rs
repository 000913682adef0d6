mod admin_session;
mod credentials;
mod middleware;

pub use admin_session::AdminSession;
pub use credentials::{validate_credentials, AdminCredentials, AuthError, Credentials};
pub use middleware::reject_anonymous_users;
