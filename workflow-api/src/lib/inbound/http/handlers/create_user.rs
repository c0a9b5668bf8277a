use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::get_user::UserData;
use super::parse_body;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = parse_body(body)?.try_into_command()?;

    state
        .user_service
        .create_user(command)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "User creation failed");
            ApiError::from(e)
        })
        .map(|ref user| ApiSuccess::created(format!("/api/users/{}", user.id), user.into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserRequest {
    username: String,
    email: String,
    password: String,
    full_name: Option<String>,
    role: Option<String>,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ApiError> {
        let mut errors = ValidationErrors::new();

        let username = if errors.required("username", "Username", &self.username) {
            Username::new(self.username)
                .map_err(|e| errors.add("username", e.to_string()))
                .ok()
        } else {
            None
        };
        let email = errors.email("email", &self.email);
        if errors.required("password", "Password", &self.password) {
            errors.length("password", "Password", &self.password, 8, 100);
        }

        let full_name = self.full_name.filter(|name| !name.trim().is_empty());
        if let Some(full_name) = &full_name {
            errors.max_length("fullName", "Full name", full_name, 100);
        }
        let role = self.role.filter(|role| !role.trim().is_empty());
        if let Some(role) = &role {
            errors.max_length("role", "Role", role, 50);
        }

        match (username, email) {
            (Some(username), Some(email)) if errors.is_empty() => Ok(CreateUserCommand::new(
                username,
                email,
                self.password,
                full_name,
                role,
            )),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_user() {
        let command = CreateUserRequest {
            username: "alice_01".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
            full_name: Some(String::new()),
            role: None,
        }
        .try_into_command()
        .expect("request should be valid");

        assert_eq!(command.role, "User");
        assert!(command.full_name.is_none());
    }

    #[test]
    fn test_invalid_username_and_short_password() {
        let Err(ApiError::Validation(errors)) = CreateUserRequest {
            username: "al-ice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
            full_name: None,
            role: Some("x".repeat(51)),
        }
        .try_into_command() else {
            panic!("expected validation errors");
        };

        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_some());
        assert!(errors.get("role").is_some());
        assert!(errors.get("email").is_none());
    }
}
