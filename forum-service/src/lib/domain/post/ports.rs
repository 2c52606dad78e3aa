use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostView;
use crate::domain::topic::models::TopicId;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Append a post to an existing topic.
    ///
    /// Any authenticated identity may post into any topic; there is no
    /// ownership or membership check on posting.
    ///
    /// # Errors
    /// * `TopicNotFound` - Parent topic does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        topic_id: TopicId,
        author_id: UserId,
        content: PostContent,
    ) -> Result<Post, PostError>;
}

/// Persistence operations for posts.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: Post) -> Result<Post, PostError>;

    /// List a topic's posts with author usernames, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_topic(&self, topic_id: &TopicId) -> Result<Vec<PostView>, PostError>;
}
