// src/infrastructure/repositories/postgres_revision.rs
use super::map_sqlx;
use crate::domain::article::{
    ArticleId, NewRevision, Revision, RevisionContent, RevisionId, RevisionRepository,
    RevisionSummary,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresRevisionRepository {
    pool: PgPool,
}

impl PostgresRevisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RevisionRow {
    id: i64,
    article_id: i64,
    content: String,
    edited_by: i64,
    edited_at: DateTime<Utc>,
    summary: String,
}

impl TryFrom<RevisionRow> for Revision {
    type Error = DomainError;

    fn try_from(row: RevisionRow) -> Result<Self, Self::Error> {
        Ok(Revision {
            id: RevisionId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            content: RevisionContent::new(row.content)?,
            edited_by: UserId::new(row.edited_by)?,
            edited_at: row.edited_at,
            summary: RevisionSummary::new(row.summary),
        })
    }
}

#[async_trait]
impl RevisionRepository for PostgresRevisionRepository {
    async fn append(&self, revision: NewRevision) -> DomainResult<Revision> {
        let NewRevision {
            article_id,
            content,
            edited_by,
            edited_at,
            summary,
        } = revision;

        let row = sqlx::query_as::<_, RevisionRow>(
            "INSERT INTO revisions (article_id, content, edited_by, edited_at, summary)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, article_id, content, edited_by, edited_at, summary",
        )
        .bind(i64::from(article_id))
        .bind(content.as_str())
        .bind(i64::from(edited_by))
        .bind(edited_at)
        .bind(summary.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Revision::try_from(row)
    }

    async fn latest_for_article(&self, article_id: ArticleId) -> DomainResult<Option<Revision>> {
        let row = sqlx::query_as::<_, RevisionRow>(
            "SELECT id, article_id, content, edited_by, edited_at, summary
             FROM revisions
             WHERE article_id = $1
             ORDER BY edited_at DESC, id DESC
             LIMIT 1",
        )
        .bind(i64::from(article_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Revision::try_from).transpose()
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Revision>> {
        let rows = sqlx::query_as::<_, RevisionRow>(
            "SELECT id, article_id, content, edited_by, edited_at, summary
             FROM revisions
             WHERE article_id = $1
             ORDER BY edited_at DESC, id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Revision::try_from).collect()
    }
}
