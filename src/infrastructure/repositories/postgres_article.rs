// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{CategoryId, TagId};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    is_redirect: bool,
    created_by: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            is_redirect: row.is_redirect,
            created_by: UserId::new(row.created_by)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            is_redirect,
            created_by,
            created_at,
            content,
            summary,
            category_ids,
            tag_ids,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, is_redirect, created_by, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, is_redirect, created_by, created_at",
        )
        .bind(title.as_str())
        .bind(is_redirect)
        .bind(i64::from(created_by))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO revisions (article_id, content, edited_by, edited_at, summary)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(row.id)
        .bind(content.as_str())
        .bind(i64::from(created_by))
        .bind(created_at)
        .bind(summary.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for category_id in category_ids {
            sqlx::query(
                "INSERT INTO article_categories (article_id, category_id) VALUES ($1, $2)",
            )
            .bind(row.id)
            .bind(i64::from(category_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        for tag_id in tag_ids {
            sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)")
                .bind(row.id)
                .bind(i64::from(tag_id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, is_redirect, created_by, created_at
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, is_redirect, created_by, created_at
             FROM articles WHERE title = $1",
        )
        .bind(title.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, is_redirect, created_by, created_at
             FROM articles ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn search_by_title(&self, query: &str) -> DomainResult<Vec<Article>> {
        // Escape LIKE metacharacters so user input only ever matches
        // literally.
        let escaped = query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{escaped}%");

        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, is_redirect, created_by, created_at
             FROM articles
             WHERE title ILIKE $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT a.id, a.title, a.is_redirect, a.created_by, a.created_at FROM articles a
             JOIN article_categories ac ON ac.article_id = a.id
             WHERE ac.category_id = $1
             ORDER BY a.created_at DESC, a.id DESC",
        )
        .bind(i64::from(category_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_tag(&self, tag_id: TagId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT a.id, a.title, a.is_redirect, a.created_by, a.created_at FROM articles a
             JOIN article_tags at ON at.article_id = a.id
             WHERE at.tag_id = $1
             ORDER BY a.created_at DESC, a.id DESC",
        )
        .bind(i64::from(tag_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
