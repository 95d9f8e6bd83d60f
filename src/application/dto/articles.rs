// src/application/dto/articles.rs
use crate::application::dto::taxonomy::{CategoryDto, TagDto};
use crate::domain::article::{Article, Revision};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub is_redirect: bool,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            is_redirect: article.is_redirect,
            created_by: article.created_by.into(),
            created_at: article.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RevisionDto {
    pub id: i64,
    pub article_id: i64,
    pub content: String,
    pub edited_by: i64,
    pub edited_at: DateTime<Utc>,
    pub summary: String,
}

impl From<Revision> for RevisionDto {
    fn from(revision: Revision) -> Self {
        Self {
            id: revision.id.into(),
            article_id: revision.article_id.into(),
            content: revision.content.into(),
            edited_by: revision.edited_by.into(),
            edited_at: revision.edited_at,
            summary: revision.summary.into(),
        }
    }
}

/// Everything the article detail page needs: the latest revision rendered
/// to HTML plus the article's taxonomy.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub article: ArticleDto,
    pub latest: RevisionDto,
    pub rendered_html: String,
    pub categories: Vec<CategoryDto>,
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone)]
pub struct RevisionView {
    pub revision: RevisionDto,
    pub rendered_html: String,
}

#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub article: ArticleDto,
    pub revisions: Vec<RevisionView>,
}

#[derive(Debug, Clone)]
pub struct EditPage {
    pub article: ArticleDto,
    pub latest: RevisionDto,
}
