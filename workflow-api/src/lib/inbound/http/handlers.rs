use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::validation::ValidationErrors;
use crate::auth::errors::AuthError;
use crate::user::errors::UserError;
use crate::workflow::errors::WorkflowError;

pub mod check_availability;
pub mod create_user;
pub mod create_workflow;
pub mod delete_user;
pub mod delete_workflow;
pub mod get_user;
pub mod get_workflow;
pub mod list_users;
pub mod list_workflows;
pub mod login;
pub mod me;
pub mod register;
pub mod update_user;
pub mod update_workflow;

/// Response header set on 401 responses caused by an expired session token.
pub const TOKEN_EXPIRED_HEADER: HeaderName = HeaderName::from_static("token-expired");

const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";
const VALIDATION_FAILURE_MESSAGE: &str = "One or more validation errors occurred";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq> {
    status: StatusCode,
    location: Option<String>,
    body: Json<T>,
}

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status && self.location == other.location && self.body.0 == other.body.0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess {
            status,
            location: None,
            body: Json(data),
        }
    }

    /// 201 response pointing at the newly created resource.
    pub fn created(location: String, data: T) -> Self {
        ApiSuccess {
            status: StatusCode::CREATED,
            location: Some(location),
            body: Json(data),
        }
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(location) = self.location {
            if let Ok(value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, value);
            }
        }
        response
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Detail is logged, never sent to the client.
    InternalServerError(String),
    BadRequest(String),
    Validation(ValidationErrors),
    NotFound(String),
    Unauthorized(String),
    TokenExpired,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody::new(GENERIC_FAILURE_MESSAGE),
                )
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, ApiErrorBody::new(message)),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    message: VALIDATION_FAILURE_MESSAGE.to_string(),
                    errors: Some(errors),
                },
            ),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, ApiErrorBody::new(message)),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, ApiErrorBody::new(message))
            }
            ApiError::TokenExpired => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ApiErrorBody::new("Token has expired")),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(TOKEN_EXPIRED_HEADER, HeaderValue::from_static("true"));
                return response;
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::InvalidUserId(_) => {
                ApiError::NotFound("User not found".to_string())
            }
            UserError::UsernameAlreadyExists(_)
            | UserError::EmailAlreadyExists(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_) => ApiError::BadRequest(err.to_string()),
            UserError::PasswordHashing(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::NotFound(_) | WorkflowError::InvalidWorkflowId(_) => {
                ApiError::NotFound("Workflow not found".to_string())
            }
            WorkflowError::InvalidName(_) => ApiError::BadRequest(err.to_string()),
            WorkflowError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateEmail(_) => {
                ApiError::BadRequest("User with this email already exists".to_string())
            }
            AuthError::DuplicateUsername(_) | AuthError::AccountDisabled => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::PasswordHashing(_) | AuthError::Token(_) | AuthError::Directory(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Unwrap a JSON body, turning a malformed or mistyped payload into a 400.
pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(rejection.body_text())
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}
