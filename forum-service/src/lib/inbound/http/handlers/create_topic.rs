use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::topic::errors::TopicContentError;
use crate::domain::topic::errors::TopicTitleError;
use crate::domain::topic::models::CreateTopicCommand;
use crate::domain::topic::models::Topic;
use crate::domain::topic::models::TopicContent;
use crate::domain::topic::models::TopicTitle;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_topic(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTopicRequest>,
) -> Result<ApiSuccess<TopicResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .topic_service
        .create_topic(command, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|topic| {
            ApiSuccess::new(
                StatusCode::CREATED,
                TopicResponseData::new(&topic, auth_user.username.clone()),
            )
        })
}

/// HTTP request body for creating a topic (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTopicRequest {
    title: String,
    content: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateTopicRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] TopicTitleError),

    #[error("Invalid content: {0}")]
    Content(#[from] TopicContentError),
}

impl CreateTopicRequest {
    fn try_into_command(self) -> Result<CreateTopicCommand, ParseCreateTopicRequestError> {
        let title = TopicTitle::new(self.title)?;
        let content = TopicContent::new(self.content)?;
        Ok(CreateTopicCommand { title, content })
    }
}

impl From<ParseCreateTopicRequestError> for ApiError {
    fn from(err: ParseCreateTopicRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicResponseData {
    pub id: String,
    pub title: String,
    pub content: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TopicResponseData {
    pub fn new(topic: &Topic, author_username: String) -> Self {
        Self {
            id: topic.id.to_string(),
            title: topic.title.as_str().to_string(),
            content: topic.content.as_str().to_string(),
            username: author_username,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}
