use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn check_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<AvailabilityData>, ApiError> {
    state
        .user_service
        .username_exists(&username)
        .await
        .map_err(ApiError::from)
        .map(|exists| ApiSuccess::new(StatusCode::OK, AvailabilityData::from_exists(exists)))
}

pub async fn check_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<ApiSuccess<AvailabilityData>, ApiError> {
    state
        .user_service
        .email_exists(&email)
        .await
        .map_err(ApiError::from)
        .map(|exists| ApiSuccess::new(StatusCode::OK, AvailabilityData::from_exists(exists)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityData {
    pub exists: bool,
    pub available: bool,
}

impl AvailabilityData {
    fn from_exists(exists: bool) -> Self {
        Self {
            exists,
            available: !exists,
        }
    }
}
