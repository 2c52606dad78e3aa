use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_topic::TopicResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::topic::errors::TopicError;
use crate::domain::topic::models::TopicContent;
use crate::domain::topic::models::TopicId;
use crate::domain::topic::models::TopicTitle;
use crate::domain::topic::models::UpdateTopicCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a topic (raw JSON)
///
/// All fields are optional to support partial updates.
#[derive(Debug, Deserialize)]
pub struct UpdateTopicRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateTopicRequest {
    fn try_into_command(self) -> Result<UpdateTopicCommand, TopicError> {
        let title = self.title.map(TopicTitle::new).transpose()?;
        let content = self.content.map(TopicContent::new).transpose()?;

        Ok(UpdateTopicCommand { title, content })
    }
}

pub async fn update_topic(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(topic_id): Path<String>,
    Json(body): Json<UpdateTopicRequest>,
) -> Result<ApiSuccess<TopicResponseData>, ApiError> {
    let topic_id =
        TopicId::from_string(&topic_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    state
        .topic_service
        .update_topic(&topic_id, command, auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|topic| {
            // Only the owner reaches this point, so the acting username is
            // the author's username
            ApiSuccess::new(
                StatusCode::OK,
                TopicResponseData::new(&topic, auth_user.username.clone()),
            )
        })
}
