use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::post::models::PostView;
use crate::domain::topic::errors::TopicContentError;
use crate::domain::topic::errors::TopicIdError;
use crate::domain::topic::errors::TopicTitleError;
use crate::domain::user::models::UserId;

/// Topic aggregate root entity.
///
/// The author is set at creation and never reassigned; only the author may
/// update or delete the topic.
#[derive(Debug, Clone)]
pub struct Topic {
    pub id: TopicId,
    pub title: TopicTitle,
    pub content: TopicContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Topic unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopicId(pub Uuid);

impl TopicId {
    /// Generate a new random topic ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a topic ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TopicIdError> {
        Uuid::parse_str(s)
            .map(TopicId)
            .map_err(|e| TopicIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TopicId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Topic title value object with validation.
///
/// Ensures the title is non-empty and within 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTitle(String);

impl TopicTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated topic title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, TopicTitleError> {
        let length = title.len();
        if length == 0 {
            Err(TopicTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TopicTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Topic body value object with validation.
///
/// Ensures the content is non-empty and within 10000 characters.
#[derive(Debug, Clone)]
pub struct TopicContent(String);

impl TopicContent {
    const MAX_LENGTH: usize = 10_000;

    /// Create a new validated topic body.
    ///
    /// # Errors
    /// * `Empty` - Content is empty
    /// * `TooLong` - Content exceeds 10000 characters
    pub fn new(content: String) -> Result<Self, TopicContentError> {
        let length = content.len();
        if length == 0 {
            Err(TopicContentError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TopicContentError::TooLong {
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

/// Command to create a new topic with validated fields.
#[derive(Debug)]
pub struct CreateTopicCommand {
    pub title: TopicTitle,
    pub content: TopicContent,
}

/// Command to update an existing topic.
///
/// All fields are optional to support partial updates.
#[derive(Debug)]
pub struct UpdateTopicCommand {
    pub title: Option<TopicTitle>,
    pub content: Option<TopicContent>,
}

/// Listing read model: one row per topic with author and reply count.
#[derive(Debug, Clone)]
pub struct TopicSummary {
    pub id: TopicId,
    pub title: String,
    pub author_username: String,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Detail read model: a topic with its author's username and ordered posts.
#[derive(Debug, Clone)]
pub struct TopicDetail {
    pub topic: Topic,
    pub author_username: String,
    pub posts: Vec<PostView>,
}
