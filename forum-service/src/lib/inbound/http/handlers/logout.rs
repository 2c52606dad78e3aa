use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Stateless logout: tokens have no server-side session to tear down and
/// expire on their own. The endpoint exists so clients have a uniform
/// sign-out call.
pub async fn logout(
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<LogoutResponseData>, ApiError> {
    tracing::debug!(user_id = %auth_user.user_id, "User logged out");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LogoutResponseData {
            message: "Successfully logged out".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
