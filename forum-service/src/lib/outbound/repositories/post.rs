use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostView;
use crate::domain::post::ports::PostRepository;
use crate::domain::topic::models::TopicId;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostViewRow {
    id: Uuid,
    content: String,
    author_username: String,
    created_at: DateTime<Utc>,
}

impl From<PostViewRow> for PostView {
    fn from(row: PostViewRow) -> Self {
        Self {
            id: PostId(row.id),
            content: row.content,
            author_username: row.author_username,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, topic_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.id.0)
        .bind(post.topic_id.0)
        .bind(post.author_id.0)
        .bind(post.content.as_str())
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn list_by_topic(&self, topic_id: &TopicId) -> Result<Vec<PostView>, PostError> {
        let rows = sqlx::query_as::<_, PostViewRow>(
            r#"
            SELECT p.id, p.content, u.username AS author_username, p.created_at
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.topic_id = $1
            ORDER BY p.created_at ASC
            "#,
        )
        .bind(topic_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(PostView::from).collect())
    }
}
