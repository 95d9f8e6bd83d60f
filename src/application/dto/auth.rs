// src/application/dto/auth.rs
use crate::domain::user::{Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user attached to a verified session, re-read from the repository on
/// every request so role and activation changes apply immediately.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Claims carried inside the signed cookie payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub uid: i64,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn user_id(&self) -> crate::domain::errors::DomainResult<UserId> {
        UserId::new(self.uid)
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// A freshly minted session token plus its validity window, ready to be
/// placed in a cookie by the presentation layer.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl IssuedSession {
    pub fn max_age_seconds(&self) -> i64 {
        self.expires_at
            .signed_duration_since(self.issued_at)
            .num_seconds()
            .max(0)
    }
}
