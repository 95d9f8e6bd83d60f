// src/domain/article/revision.rs
use crate::domain::article::value_objects::{ArticleId, RevisionContent, RevisionId, RevisionSummary};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// An immutable snapshot of an article's content. Revisions are appended,
/// never rewritten; the newest one by (edited_at, id) is the article's
/// current content.
#[derive(Debug, Clone)]
pub struct Revision {
    pub id: RevisionId,
    pub article_id: ArticleId,
    pub content: RevisionContent,
    pub edited_by: UserId,
    pub edited_at: DateTime<Utc>,
    pub summary: RevisionSummary,
}

#[derive(Debug, Clone)]
pub struct NewRevision {
    pub article_id: ArticleId,
    pub content: RevisionContent,
    pub edited_by: UserId,
    pub edited_at: DateTime<Utc>,
    pub summary: RevisionSummary,
}
