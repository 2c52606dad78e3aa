//! Authentication utilities library
//!
//! Provides the authentication and authorization core for the forum backend:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (JWT)
//! - The ownership gate applied to resource mutation
//! - Authentication coordination
//!
//! Everything here is pure computation: no I/O, no shared mutable state. The
//! signing secret and token lifetime are fixed at construction time.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("wrong_password", &digest));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", 60);
//! let token = tokens.issue("user123").unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 60);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Per request: validate token and recover the subject
//! let subject = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(subject, "user123");
//! ```

pub mod authenticator;
pub mod ownership;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use ownership::authorize_mutation;
pub use ownership::NotOwner;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
