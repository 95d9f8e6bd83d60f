// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, RevisionContent, RevisionSummary};
use crate::domain::taxonomy::{CategoryId, TagId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub is_redirect: bool,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// A yet-to-be-persisted article together with its first revision and its
/// taxonomy links. The write repository stores the whole value in one
/// transaction so no article row ever exists without a revision.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub is_redirect: bool,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub content: RevisionContent,
    pub summary: RevisionSummary,
    pub category_ids: Vec<CategoryId>,
    pub tag_ids: Vec<TagId>,
}
