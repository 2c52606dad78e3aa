use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::topic::models::TopicId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(topic_id): Path<String>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let topic_id =
        TopicId::from_string(&topic_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let content = PostContent::new(body.content)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .post_service
        .create_post(topic_id, auth_user.user_id, content)
        .await
        .map_err(ApiError::from)
        .map(|post| {
            ApiSuccess::new(
                StatusCode::CREATED,
                PostResponseData::new(&post, auth_user.username.clone()),
            )
        })
}

/// HTTP request body for creating a post (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostResponseData {
    pub id: String,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl PostResponseData {
    pub fn new(post: &Post, author_username: String) -> Self {
        Self {
            id: post.id.to_string(),
            content: post.content.as_str().to_string(),
            username: author_username,
            created_at: post.created_at,
        }
    }
}
