use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;

/// Self-service registration request.
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

/// A user together with a freshly issued session token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Result of a login attempt that did not hit a hard failure.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated(AuthSession),
    /// Unknown email or wrong password; deliberately not told apart.
    NoMatch,
}
