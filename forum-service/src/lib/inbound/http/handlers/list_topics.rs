use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::topic::models::TopicSummary;
use crate::inbound::http::router::AppState;

pub async fn list_topics(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TopicSummaryData>>, ApiError> {
    state
        .topic_service
        .list_topics()
        .await
        .map_err(ApiError::from)
        .map(|summaries| {
            let data = summaries.iter().map(TopicSummaryData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummaryData {
    pub id: String,
    pub title: String,
    pub username: String,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&TopicSummary> for TopicSummaryData {
    fn from(summary: &TopicSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title.clone(),
            username: summary.author_username.clone(),
            post_count: summary.post_count,
            created_at: summary.created_at,
        }
    }
}
