use async_trait::async_trait;

use crate::domain::topic::errors::TopicError;
use crate::domain::topic::models::CreateTopicCommand;
use crate::domain::topic::models::Topic;
use crate::domain::topic::models::TopicDetail;
use crate::domain::topic::models::TopicId;
use crate::domain::topic::models::TopicSummary;
use crate::domain::topic::models::UpdateTopicCommand;
use crate::domain::user::models::UserId;

/// Port for topic domain service operations.
#[async_trait]
pub trait TopicServicePort: Send + Sync + 'static {
    /// Create a new topic owned by the acting identity.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_topic(
        &self,
        command: CreateTopicCommand,
        author_id: UserId,
    ) -> Result<Topic, TopicError>;

    /// List all topics, newest first, with author username and reply count.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_topics(&self) -> Result<Vec<TopicSummary>, TopicError>;

    /// Retrieve a topic with its posts ordered by creation time.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_topic(&self, id: &TopicId) -> Result<TopicDetail, TopicError>;

    /// Update a topic's title and/or content. Owner only.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `Forbidden` - Acting identity is not the topic's author
    /// * `DatabaseError` - Database operation failed
    async fn update_topic(
        &self,
        id: &TopicId,
        command: UpdateTopicCommand,
        actor_id: UserId,
    ) -> Result<Topic, TopicError>;

    /// Delete a topic. Owner only; the topic's posts go with it.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `Forbidden` - Acting identity is not the topic's author
    /// * `DatabaseError` - Database operation failed
    async fn delete_topic(&self, id: &TopicId, actor_id: UserId) -> Result<(), TopicError>;
}

/// Persistence operations for the topic aggregate.
///
/// Deleting a topic cascades to its posts at the storage layer; the domain
/// does not implement cascade logic itself.
#[async_trait]
pub trait TopicRepository: Send + Sync + 'static {
    /// Persist a new topic.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, topic: Topic) -> Result<Topic, TopicError>;

    /// Retrieve a topic by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, TopicError>;

    /// Retrieve a topic together with its author's username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_with_author(
        &self,
        id: &TopicId,
    ) -> Result<Option<(Topic, String)>, TopicError>;

    /// List summaries of all topics, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_summaries(&self) -> Result<Vec<TopicSummary>, TopicError>;

    /// Update an existing topic.
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, topic: Topic) -> Result<Topic, TopicError>;

    /// Remove a topic (and, via storage cascade, its posts).
    ///
    /// # Errors
    /// * `NotFound` - Topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &TopicId) -> Result<(), TopicError>;
}
