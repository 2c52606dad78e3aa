use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved identity through request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware that authenticates a request: bearer token -> subject ->
/// stored identity.
///
/// The token only proves who signed the subject; whether that subject still
/// names a live account is decided here, by looking it up. A token for an
/// account deleted since issuance verifies fine and then fails resolution.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let subject = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    let user_id = UserId::from_string(&subject).map_err(|e| {
        tracing::warn!("Failed to parse user ID from token subject: {}", e);
        unauthorized("Invalid token format")
    })?;

    // Resolve the subject to a stored identity
    let user = state.user_service.get_user(&user_id).await.map_err(|e| match e {
        UserError::NotFound(_) => {
            tracing::warn!(user_id = %user_id, "Token subject no longer resolves to a user");
            unauthorized("Unknown user")
        }
        other => {
            tracing::error!(error = %other, "Identity resolution failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username.as_str().to_string(),
    });

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": message })),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
