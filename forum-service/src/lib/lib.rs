pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::post::service::PostService;
pub use domain::topic::service::TopicService;
pub use domain::user::models::UserId;
pub use domain::user::service::UserService;
