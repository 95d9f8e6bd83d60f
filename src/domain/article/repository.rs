// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::revision::{NewRevision, Revision};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::{CategoryId, TagId};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert the article, its initial revision, and its category/tag links
    /// atomically.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>>;
    /// All articles, newest first.
    async fn list(&self) -> DomainResult<Vec<Article>>;
    /// Case-insensitive substring match on the title, newest first.
    async fn search_by_title(&self, query: &str) -> DomainResult<Vec<Article>>;
    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Article>>;
    async fn list_by_tag(&self, tag_id: TagId) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait RevisionRepository: Send + Sync {
    async fn append(&self, revision: NewRevision) -> DomainResult<Revision>;
    async fn latest_for_article(&self, article_id: ArticleId) -> DomainResult<Option<Revision>>;
    /// Full history, newest first.
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Revision>>;
}
