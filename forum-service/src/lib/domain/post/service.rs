use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::topic::models::TopicId;
use crate::domain::topic::ports::TopicRepository;
use crate::domain::user::models::UserId;

/// Concrete implementation of PostServicePort.
///
/// Posting is open to any authenticated identity; the only precondition is
/// that the parent topic exists.
pub struct PostService<PR, TR>
where
    PR: PostRepository,
    TR: TopicRepository,
{
    post_repository: Arc<PR>,
    topic_repository: Arc<TR>,
}

impl<PR, TR> PostService<PR, TR>
where
    PR: PostRepository,
    TR: TopicRepository,
{
    /// Create a new post service with injected repositories.
    pub fn new(post_repository: Arc<PR>, topic_repository: Arc<TR>) -> Self {
        Self {
            post_repository,
            topic_repository,
        }
    }
}

#[async_trait]
impl<PR, TR> PostServicePort for PostService<PR, TR>
where
    PR: PostRepository,
    TR: TopicRepository,
{
    async fn create_post(
        &self,
        topic_id: TopicId,
        author_id: UserId,
        content: PostContent,
    ) -> Result<Post, PostError> {
        // Verify the parent topic exists
        self.topic_repository
            .find_by_id(&topic_id)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?
            .ok_or(PostError::TopicNotFound(topic_id))?;

        let post = Post {
            id: PostId::new(),
            topic_id,
            author_id,
            content,
            created_at: Utc::now(),
        };

        let saved_post = self.post_repository.create(post).await?;

        tracing::debug!(
            post_id = %saved_post.id,
            topic_id = %saved_post.topic_id,
            "Post created"
        );

        Ok(saved_post)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::post::models::PostView;
    use crate::domain::topic::errors::TopicError;
    use crate::domain::topic::models::Topic;
    use crate::domain::topic::models::TopicContent;
    use crate::domain::topic::models::TopicSummary;
    use crate::domain::topic::models::TopicTitle;

    mock! {
        pub TestPostRepository {}

        #[async_trait]
        impl PostRepository for TestPostRepository {
            async fn create(&self, post: Post) -> Result<Post, PostError>;
            async fn list_by_topic(&self, topic_id: &TopicId) -> Result<Vec<PostView>, PostError>;
        }
    }

    mock! {
        pub TestTopicRepository {}

        #[async_trait]
        impl TopicRepository for TestTopicRepository {
            async fn create(&self, topic: Topic) -> Result<Topic, TopicError>;
            async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, TopicError>;
            async fn find_with_author(
                &self,
                id: &TopicId,
            ) -> Result<Option<(Topic, String)>, TopicError>;
            async fn list_summaries(&self) -> Result<Vec<TopicSummary>, TopicError>;
            async fn update(&self, topic: Topic) -> Result<Topic, TopicError>;
            async fn delete(&self, id: &TopicId) -> Result<(), TopicError>;
        }
    }

    fn sample_topic(id: TopicId, author_id: UserId) -> Topic {
        Topic {
            id,
            title: TopicTitle::new("First topic".to_string()).unwrap(),
            content: TopicContent::new("Hello, forum!".to_string()).unwrap(),
            author_id,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_post_success() {
        let mut post_repository = MockTestPostRepository::new();
        let mut topic_repository = MockTestTopicRepository::new();

        let topic_id = TopicId::new();
        let topic_owner = UserId::new();
        let poster = UserId::new();

        let topic = sample_topic(topic_id, topic_owner);
        topic_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(topic.clone())));

        post_repository
            .expect_create()
            .withf(move |post| {
                post.topic_id == topic_id
                    && post.author_id == poster
                    && post.content.as_str() == "Nice topic!"
            })
            .times(1)
            .returning(|post| Ok(post));

        let service = PostService::new(Arc::new(post_repository), Arc::new(topic_repository));

        let content = PostContent::new("Nice topic!".to_string()).unwrap();

        // Poster is not the topic owner; posting is open to any identity
        let post = service.create_post(topic_id, poster, content).await.unwrap();
        assert_eq!(post.topic_id, topic_id);
        assert_eq!(post.author_id, poster);
    }

    #[tokio::test]
    async fn test_create_post_topic_not_found() {
        let post_repository = MockTestPostRepository::new();
        let mut topic_repository = MockTestTopicRepository::new();

        topic_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(post_repository), Arc::new(topic_repository));

        let content = PostContent::new("Hello".to_string()).unwrap();

        let result = service
            .create_post(TopicId::new(), UserId::new(), content)
            .await;
        assert!(matches!(result.unwrap_err(), PostError::TopicNotFound(_)));
    }
}
