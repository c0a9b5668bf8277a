use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Echo the identity carried by the caller's session token.
pub async fn me(Extension(user): Extension<AuthenticatedUser>) -> ApiSuccess<MeResponseData> {
    ApiSuccess::new(StatusCode::OK, user.into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseData {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<AuthenticatedUser> for MeResponseData {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            email: user.email,
            name: user.username,
            role: user.role,
        }
    }
}
