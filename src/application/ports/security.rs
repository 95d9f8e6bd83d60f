// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{IssuedSession, SessionClaims},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues and verifies the signed session cookie value. The token is
/// self-contained; verification never touches storage.
pub trait SessionCodec: Send + Sync {
    fn issue(&self, user_id: UserId, now: DateTime<Utc>) -> ApplicationResult<IssuedSession>;
    fn verify(&self, token: &str, now: DateTime<Utc>) -> ApplicationResult<SessionClaims>;
}
