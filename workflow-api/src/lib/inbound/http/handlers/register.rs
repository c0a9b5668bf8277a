use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::parse_body;
use super::ApiError;
use super::ApiSuccess;
use crate::auth::models::AuthSession;
use crate::auth::models::RegisterCommand;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let command = parse_body(body)?.try_into_command()?;

    tracing::info!(email = %command.email, "Registration attempt");

    state
        .auth_service
        .register(command)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Registration failed");
            ApiError::from(e)
        })
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}

/// HTTP request body for self-service registration (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if errors.required("name", "Name", name) {
            errors.length("name", "Name", name, 2, 50);
        }
        let email = errors.email("email", &self.email);
        if errors.required("password", "Password", &self.password) {
            errors.length("password", "Password", &self.password, 6, 100);
        }
        errors.ensure(
            self.confirm_password == self.password,
            "confirmPassword",
            "Passwords do not match",
        );

        match email {
            Some(email) if errors.is_empty() => Ok(RegisterCommand {
                name: name.to_string(),
                email,
                password: self.password,
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Session payload returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseData {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl From<AuthSession> for AuthResponseData {
    fn from(session: AuthSession) -> Self {
        Self {
            user_id: session.user.id.to_string(),
            email: session.user.email.as_str().to_string(),
            name: session.user.display_name().to_string(),
            token: session.token,
            expires_at: session.expires_at,
            refresh_token: None,
        }
    }
}
