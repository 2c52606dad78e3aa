use thiserror::Error;

use crate::domain::topic::models::TopicId;

/// Error for TopicId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopicIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TopicTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopicTitleError {
    #[error("Topic title is empty")]
    Empty,

    #[error("Topic title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for TopicContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopicContentError {
    #[error("Topic content is empty")]
    Empty,

    #[error("Topic content too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all topic-related operations
#[derive(Debug, Clone, Error)]
pub enum TopicError {
    #[error("Invalid topic ID: {0}")]
    InvalidTopicId(#[from] TopicIdError),

    #[error("Invalid topic title: {0}")]
    InvalidTitle(#[from] TopicTitleError),

    #[error("Invalid topic content: {0}")]
    InvalidContent(#[from] TopicContentError),

    // Domain-level errors. NotFound and Forbidden are deliberately distinct:
    // a caller must be able to tell "topic does not exist" from "topic exists
    // but you are not its owner".
    #[error("Topic not found: {0}")]
    NotFound(TopicId),

    #[error("Not the owner of topic: {0}")]
    Forbidden(TopicId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for TopicError {
    fn from(err: anyhow::Error) -> Self {
        TopicError::Unknown(err.to_string())
    }
}
