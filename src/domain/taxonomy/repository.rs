// src/domain/taxonomy/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::entity::{Category, NewCategory, NewTag, Tag};
use crate::domain::taxonomy::value_objects::{CategoryId, TagId};
use async_trait::async_trait;

#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn insert_category(&self, category: NewCategory) -> DomainResult<Category>;
    async fn insert_tag(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn find_category(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_tag(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn list_categories(&self) -> DomainResult<Vec<Category>>;
    async fn list_tags(&self) -> DomainResult<Vec<Tag>>;
    async fn categories_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Category>>;
    async fn tags_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>>;
}
