use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostView;
use crate::domain::topic::models::TopicDetail;
use crate::domain::topic::models::TopicId;
use crate::inbound::http::router::AppState;

pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> Result<ApiSuccess<TopicDetailData>, ApiError> {
    let topic_id =
        TopicId::from_string(&topic_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .topic_service
        .get_topic(&topic_id)
        .await
        .map_err(ApiError::from)
        .map(|ref detail| ApiSuccess::new(StatusCode::OK, detail.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDetailData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub posts: Vec<PostData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: String,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&PostView> for PostData {
    fn from(post: &PostView) -> Self {
        Self {
            id: post.id.to_string(),
            content: post.content.clone(),
            username: post.author_username.clone(),
            created_at: post.created_at,
        }
    }
}

impl From<&TopicDetail> for TopicDetailData {
    fn from(detail: &TopicDetail) -> Self {
        Self {
            id: detail.topic.id.to_string(),
            title: detail.topic.title.as_str().to_string(),
            content: detail.topic.content.as_str().to_string(),
            username: detail.author_username.clone(),
            created_at: detail.topic.created_at,
            updated_at: detail.topic.updated_at,
            posts: detail.posts.iter().map(PostData::from).collect(),
        }
    }
}
