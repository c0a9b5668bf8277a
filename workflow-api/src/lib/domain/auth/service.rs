use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::models::DEFAULT_ROLE;
use crate::domain::user::ports::UserRepository;

/// Registration and login over the user directory.
///
/// Holds no per-request state: every call reads the directory, hashes or
/// verifies, and issues a token.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn open_session(&self, user: User) -> Result<AuthSession, AuthError> {
        let issued = self.authenticator.issue_token(&user.identity())?;

        Ok(AuthSession {
            user,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, AuthError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateEmail(command.email.as_str().to_string()));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        // Username collisions surface from the directory's unique constraint.
        let username = Username::from_email(&command.email);

        let user = User::new(
            username,
            command.email,
            password_hash,
            Some(command.name),
            DEFAULT_ROLE.to_string(),
            Utc::now(),
        );

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        self.open_session(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError> {
        let Some(mut user) = self
            .repository
            .find_by_email(command.email.as_str())
            .await?
        else {
            return Ok(LoginOutcome::NoMatch);
        };

        if !self
            .authenticator
            .verify_password(&command.password, &user.password_hash)
        {
            return Ok(LoginOutcome::NoMatch);
        }

        if !user.is_active {
            tracing::warn!(user_id = %user.id, "Login rejected for disabled account");
            return Err(AuthError::AccountDisabled);
        }

        let now = Utc::now();
        self.repository.record_login(&user.id, now).await?;
        user.record_login(now);

        tracing::info!(user_id = %user.id, "User logged in");

        self.open_session(user).map(LoginOutcome::Authenticated)
    }
}
