use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::parse_body;
use super::register::AuthResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::auth::models::LoginCommand;
use crate::auth::models::LoginOutcome;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;

const NO_MATCH_MESSAGE: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let command = parse_body(body)?.try_into_command()?;

    tracing::info!(email = %command.email, "Login attempt");

    let outcome = state.auth_service.login(command).await.map_err(|e| {
        tracing::warn!(error = %e, "Login failed");
        ApiError::from(e)
    })?;

    match outcome {
        LoginOutcome::Authenticated(session) => {
            Ok(ApiSuccess::new(StatusCode::OK, session.into()))
        }
        LoginOutcome::NoMatch => {
            tracing::warn!("Login rejected: credentials did not match");
            Err(ApiError::Unauthorized(NO_MATCH_MESSAGE.to_string()))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        let mut errors = ValidationErrors::new();

        let email = errors.email("email", &self.email);
        errors.required("password", "Password", &self.password);

        match email {
            Some(email) if errors.is_empty() => Ok(LoginCommand {
                email,
                password: self.password,
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}
