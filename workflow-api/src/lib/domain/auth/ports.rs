use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::models::RegisterCommand;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and open a session for it.
    ///
    /// The username is the local part of the email address.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered (nothing is written)
    /// * `DuplicateUsername` - Derived username collides with an existing user
    /// * `Directory` - Persistence failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, AuthError>;

    /// Check credentials and open a session.
    ///
    /// # Returns
    /// `Authenticated` with a new token, or `NoMatch` for an unknown email or
    /// a wrong password
    ///
    /// # Errors
    /// * `AccountDisabled` - Credentials are right but the account is inactive
    /// * `Directory` - Persistence failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError>;
}
