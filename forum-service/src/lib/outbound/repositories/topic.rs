use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::topic::errors::TopicError;
use crate::domain::topic::models::Topic;
use crate::domain::topic::models::TopicContent;
use crate::domain::topic::models::TopicId;
use crate::domain::topic::models::TopicSummary;
use crate::domain::topic::models::TopicTitle;
use crate::domain::topic::ports::TopicRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TopicRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TopicRow {
    fn try_into_topic(self) -> Result<Topic, TopicError> {
        Ok(Topic {
            id: TopicId(self.id),
            title: TopicTitle::new(self.title)?,
            content: TopicContent::new(self.content)?,
            author_id: UserId(self.author_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TopicWithAuthorRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    author_username: String,
}

#[derive(sqlx::FromRow)]
struct TopicSummaryRow {
    id: Uuid,
    title: String,
    author_username: String,
    post_count: i64,
    created_at: DateTime<Utc>,
}

impl From<TopicSummaryRow> for TopicSummary {
    fn from(row: TopicSummaryRow) -> Self {
        Self {
            id: TopicId(row.id),
            title: row.title,
            author_username: row.author_username,
            post_count: row.post_count,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn create(&self, topic: Topic) -> Result<Topic, TopicError> {
        sqlx::query(
            r#"
            INSERT INTO topics (id, title, content, author_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(topic.id.0)
        .bind(topic.title.as_str())
        .bind(topic.content.as_str())
        .bind(topic.author_id.0)
        .bind(topic.created_at)
        .bind(topic.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        Ok(topic)
    }

    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, TopicError> {
        let row = sqlx::query_as::<_, TopicRow>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        row.map(TopicRow::try_into_topic).transpose()
    }

    async fn find_with_author(
        &self,
        id: &TopicId,
    ) -> Result<Option<(Topic, String)>, TopicError> {
        let row = sqlx::query_as::<_, TopicWithAuthorRow>(
            r#"
            SELECT t.id, t.title, t.content, t.author_id, t.created_at, t.updated_at,
                   u.username AS author_username
            FROM topics t
            JOIN users u ON u.id = t.author_id
            WHERE t.id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        row.map(|row| {
            let author_username = row.author_username;
            let topic = TopicRow {
                id: row.id,
                title: row.title,
                content: row.content,
                author_id: row.author_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            }
            .try_into_topic()?;

            Ok((topic, author_username))
        })
        .transpose()
    }

    async fn list_summaries(&self) -> Result<Vec<TopicSummary>, TopicError> {
        let rows = sqlx::query_as::<_, TopicSummaryRow>(
            r#"
            SELECT t.id, t.title, u.username AS author_username,
                   COUNT(p.id) AS post_count, t.created_at
            FROM topics t
            JOIN users u ON u.id = t.author_id
            LEFT JOIN posts p ON p.topic_id = t.id
            GROUP BY t.id, t.title, u.username, t.created_at
            ORDER BY t.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(TopicSummary::from).collect())
    }

    async fn update(&self, topic: Topic) -> Result<Topic, TopicError> {
        let result = sqlx::query(
            r#"
            UPDATE topics
            SET title = $2, content = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(topic.id.0)
        .bind(topic.title.as_str())
        .bind(topic.content.as_str())
        .bind(topic.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TopicError::NotFound(topic.id));
        }

        Ok(topic)
    }

    async fn delete(&self, id: &TopicId) -> Result<(), TopicError> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TopicError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TopicError::NotFound(*id));
        }

        Ok(())
    }
}
