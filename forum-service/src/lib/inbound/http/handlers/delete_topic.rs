use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::topic::models::TopicId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_topic(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(topic_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let topic_id =
        TopicId::from_string(&topic_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .topic_service
        .delete_topic(&topic_id, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
