use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn find_existing(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .username_exists(command.username.as_str())
            .await?
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        if self.repository.email_exists(command.email.as_str()).await? {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User::new(
            command.username,
            command.email,
            password_hash,
            command.full_name,
            command.role,
            Utc::now(),
        );

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User created"
        );

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.find_existing(id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self.find_existing(id).await?;

        if let Some(new_email) = command.email {
            if new_email != user.email {
                if self.repository.email_exists(new_email.as_str()).await? {
                    return Err(UserError::EmailAlreadyExists(new_email.as_str().to_string()));
                }
                user.email = new_email;
            }
        }

        if let Some(full_name) = command.full_name {
            user.full_name = Some(full_name);
        }

        if let Some(role) = command.role {
            user.role = role;
        }

        if let Some(is_active) = command.is_active {
            user.is_active = is_active;
        }

        user.touch(Utc::now());

        let updated_user = self.repository.update(user).await?;

        tracing::info!(
            user_id = %updated_user.id,
            username = %updated_user.username,
            "User updated"
        );

        Ok(updated_user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        let user = self.find_existing(id).await?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, username = %user.username, "User deleted");

        Ok(())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserError> {
        self.repository.username_exists(username).await
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserError> {
        self.repository.email_exists(email).await
    }
}
