use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Identity of the caller, taken from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Middleware that validates bearer tokens and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        if e.is_expired() {
            ApiError::TokenExpired
        } else {
            ApiError::Unauthorized("Invalid token".to_string())
        }
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!(error = %e, "Token subject is not a user id");
        ApiError::Unauthorized("Invalid token".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::Unauthorized(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            )
        })
}
