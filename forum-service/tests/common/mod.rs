use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use forum_service::domain::post::errors::PostError;
use forum_service::domain::post::models::Post;
use forum_service::domain::post::models::PostView;
use forum_service::domain::post::ports::PostRepository;
use forum_service::domain::post::service::PostService;
use forum_service::domain::topic::errors::TopicError;
use forum_service::domain::topic::models::Topic;
use forum_service::domain::topic::models::TopicId;
use forum_service::domain::topic::models::TopicSummary;
use forum_service::domain::topic::ports::TopicRepository;
use forum_service::domain::topic::service::TopicService;
use forum_service::domain::user::errors::UserError;
use forum_service::domain::user::models::User;
use forum_service::domain::user::models::UserId;
use forum_service::domain::user::ports::UserRepository;
use forum_service::domain::user::service::UserService;
use forum_service::inbound::http::router::create_router;

/// Signing secret shared between the spawned server and the tests.
///
/// Lets tests mint tokens the server will accept, including already-expired
/// ones (negative lifetime) and tokens for subjects that were never
/// registered.
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Shared in-memory backing store for the test repositories
#[derive(Default)]
struct Store {
    users: Vec<User>,
    topics: Vec<Topic>,
    posts: Vec<Post>,
}

#[derive(Clone, Default)]
struct InMemoryStore {
    inner: Arc<Mutex<Store>>,
}

struct InMemoryUserRepository {
    store: InMemoryStore,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut store = self.store.inner.lock().unwrap();

        if store.users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        if store.users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        store.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store.users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store.users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

struct InMemoryTopicRepository {
    store: InMemoryStore,
}

impl InMemoryTopicRepository {
    fn username_of(store: &Store, author_id: &UserId) -> String {
        store
            .users
            .iter()
            .find(|u| u.id == *author_id)
            .map(|u| u.username.as_str().to_string())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicRepository {
    async fn create(&self, topic: Topic) -> Result<Topic, TopicError> {
        let mut store = self.store.inner.lock().unwrap();
        store.topics.push(topic.clone());
        Ok(topic)
    }

    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, TopicError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store.topics.iter().find(|t| t.id == *id).cloned())
    }

    async fn find_with_author(
        &self,
        id: &TopicId,
    ) -> Result<Option<(Topic, String)>, TopicError> {
        let store = self.store.inner.lock().unwrap();
        Ok(store.topics.iter().find(|t| t.id == *id).cloned().map(|t| {
            let username = Self::username_of(&store, &t.author_id);
            (t, username)
        }))
    }

    async fn list_summaries(&self) -> Result<Vec<TopicSummary>, TopicError> {
        let store = self.store.inner.lock().unwrap();

        let mut summaries: Vec<TopicSummary> = store
            .topics
            .iter()
            .map(|t| TopicSummary {
                id: t.id,
                title: t.title.as_str().to_string(),
                author_username: Self::username_of(&store, &t.author_id),
                post_count: store.posts.iter().filter(|p| p.topic_id == t.id).count() as i64,
                created_at: t.created_at,
            })
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(summaries)
    }

    async fn update(&self, topic: Topic) -> Result<Topic, TopicError> {
        let mut store = self.store.inner.lock().unwrap();
        let existing = store
            .topics
            .iter_mut()
            .find(|t| t.id == topic.id)
            .ok_or(TopicError::NotFound(topic.id))?;
        *existing = topic.clone();
        Ok(topic)
    }

    async fn delete(&self, id: &TopicId) -> Result<(), TopicError> {
        let mut store = self.store.inner.lock().unwrap();
        let before = store.topics.len();
        store.topics.retain(|t| t.id != *id);
        if store.topics.len() == before {
            return Err(TopicError::NotFound(*id));
        }
        // Storage-level cascade, as the real schema does
        store.posts.retain(|p| p.topic_id != *id);
        Ok(())
    }
}

struct InMemoryPostRepository {
    store: InMemoryStore,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        let mut store = self.store.inner.lock().unwrap();
        store.posts.push(post.clone());
        Ok(post)
    }

    async fn list_by_topic(&self, topic_id: &TopicId) -> Result<Vec<PostView>, PostError> {
        let store = self.store.inner.lock().unwrap();

        let mut views: Vec<PostView> = store
            .posts
            .iter()
            .filter(|p| p.topic_id == *topic_id)
            .map(|p| PostView {
                id: p.id,
                content: p.content.as_str().to_string(),
                author_username: InMemoryTopicRepository::username_of(&store, &p.author_id),
                created_at: p.created_at,
            })
            .collect();
        // Stable sort: posts created in the same instant keep insertion order
        views.sort_by_key(|v| v.created_at);

        Ok(views)
    }
}

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let store = InMemoryStore::default();

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository {
            store: store.clone(),
        });
        let topic_repository = Arc::new(InMemoryTopicRepository {
            store: store.clone(),
        });
        let post_repository = Arc::new(InMemoryPostRepository { store });

        let user_service = Arc::new(UserService::new(user_repository));
        let topic_service = Arc::new(TopicService::new(
            Arc::clone(&topic_repository),
            Arc::clone(&post_repository),
        ));
        let post_service = Arc::new(PostService::new(post_repository, topic_repository));

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET, 60));

        let router = create_router(user_service, topic_service, post_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .patch(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}
