use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::get_user::UserData;
use super::parse_body;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;
use crate::user::errors::UserError;

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = parse_body(body)?.try_into_command()?;

    state
        .user_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// HTTP request body for updating a user (raw JSON)
///
/// Absent fields and empty strings leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateUserRequest {
    email: Option<String>,
    full_name: Option<String>,
    role: Option<String>,
    is_active: Option<bool>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ApiError> {
        let mut errors = ValidationErrors::new();

        let email = non_empty(self.email).and_then(|email| errors.email("email", &email));
        let full_name = non_empty(self.full_name);
        if let Some(full_name) = &full_name {
            errors.max_length("fullName", "Full name", full_name, 100);
        }
        let role = non_empty(self.role);
        if let Some(role) = &role {
            errors.max_length("role", "Role", role, 50);
        }

        errors.into_result()?;

        Ok(UpdateUserCommand {
            email,
            full_name,
            role,
            is_active: self.is_active,
        })
    }
}
