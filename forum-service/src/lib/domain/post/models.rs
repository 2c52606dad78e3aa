use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::post::errors::PostContentError;
use crate::domain::post::errors::PostIdError;
use crate::domain::topic::models::TopicId;
use crate::domain::user::models::UserId;

/// Post entity: a single reply inside a topic.
///
/// Append-only; posts are ordered by creation time and have exactly one
/// author, set at creation.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub topic_id: TopicId,
    pub author_id: UserId,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
}

/// Post unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Generate a new random post ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post content value object with validation.
///
/// Ensures content is non-empty and within 4000 characters.
#[derive(Debug, Clone)]
pub struct PostContent(String);

impl PostContent {
    const MAX_LENGTH: usize = 4000;

    /// Create a new validated post content.
    ///
    /// # Errors
    /// * `Empty` - Content is empty string
    /// * `TooLong` - Content exceeds 4000 characters
    pub fn new(content: String) -> Result<Self, PostContentError> {
        let length = content.len();
        if length == 0 {
            Err(PostContentError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(PostContentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(content))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read model: a post joined with its author's username.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: PostId,
    pub content: String,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}
