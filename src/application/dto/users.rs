// src/application/dto/users.rs
use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            email: user.email.into(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}
