use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::ports::PostRepository;
use crate::domain::topic::errors::TopicError;
use crate::domain::topic::models::CreateTopicCommand;
use crate::domain::topic::models::Topic;
use crate::domain::topic::models::TopicDetail;
use crate::domain::topic::models::TopicId;
use crate::domain::topic::models::TopicSummary;
use crate::domain::topic::models::UpdateTopicCommand;
use crate::domain::topic::ports::TopicRepository;
use crate::domain::topic::ports::TopicServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of TopicServicePort.
///
/// Mutation goes through the ownership gate: update and delete are permitted
/// only to the identity that created the topic.
pub struct TopicService<TR, PR>
where
    TR: TopicRepository,
    PR: PostRepository,
{
    topic_repository: Arc<TR>,
    post_repository: Arc<PR>,
}

impl<TR, PR> TopicService<TR, PR>
where
    TR: TopicRepository,
    PR: PostRepository,
{
    /// Create a new topic service with injected repositories.
    pub fn new(topic_repository: Arc<TR>, post_repository: Arc<PR>) -> Self {
        Self {
            topic_repository,
            post_repository,
        }
    }

    /// Load a topic and check that the actor owns it.
    ///
    /// Existence is checked first so that a missing topic reports NotFound
    /// rather than Forbidden.
    async fn find_owned(&self, id: &TopicId, actor_id: UserId) -> Result<Topic, TopicError> {
        let topic = self
            .topic_repository
            .find_by_id(id)
            .await?
            .ok_or(TopicError::NotFound(*id))?;

        auth::authorize_mutation(&topic.author_id, &actor_id)
            .map_err(|_| TopicError::Forbidden(*id))?;

        Ok(topic)
    }
}

#[async_trait]
impl<TR, PR> TopicServicePort for TopicService<TR, PR>
where
    TR: TopicRepository,
    PR: PostRepository,
{
    async fn create_topic(
        &self,
        command: CreateTopicCommand,
        author_id: UserId,
    ) -> Result<Topic, TopicError> {
        let topic = Topic {
            id: TopicId::new(),
            title: command.title,
            content: command.content,
            author_id,
            created_at: Utc::now(),
            updated_at: None,
        };

        let created_topic = self.topic_repository.create(topic).await?;

        tracing::info!(
            topic_id = %created_topic.id,
            author_id = %created_topic.author_id,
            "Topic created"
        );

        Ok(created_topic)
    }

    async fn list_topics(&self) -> Result<Vec<TopicSummary>, TopicError> {
        self.topic_repository.list_summaries().await
    }

    async fn get_topic(&self, id: &TopicId) -> Result<TopicDetail, TopicError> {
        let (topic, author_username) = self
            .topic_repository
            .find_with_author(id)
            .await?
            .ok_or(TopicError::NotFound(*id))?;

        let posts = self
            .post_repository
            .list_by_topic(id)
            .await
            .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        Ok(TopicDetail {
            topic,
            author_username,
            posts,
        })
    }

    async fn update_topic(
        &self,
        id: &TopicId,
        command: UpdateTopicCommand,
        actor_id: UserId,
    ) -> Result<Topic, TopicError> {
        let mut topic = self.find_owned(id, actor_id).await?;

        if let Some(new_title) = command.title {
            topic.title = new_title;
        }

        if let Some(new_content) = command.content {
            topic.content = new_content;
        }

        topic.updated_at = Some(Utc::now());

        self.topic_repository.update(topic).await
    }

    async fn delete_topic(&self, id: &TopicId, actor_id: UserId) -> Result<(), TopicError> {
        self.find_owned(id, actor_id).await?;

        self.topic_repository.delete(id).await?;

        tracing::info!(topic_id = %id, "Topic deleted");

        Ok(())
    }
}
