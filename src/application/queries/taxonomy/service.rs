// src/application/queries/taxonomy/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, CategoryPage, TagDto, TagPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleReadRepository,
        taxonomy::{CategoryId, TagId, TaxonomyRepository},
    },
};

pub struct TaxonomyQueryService {
    taxonomy_repo: Arc<dyn TaxonomyRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
}

impl TaxonomyQueryService {
    pub fn new(
        taxonomy_repo: Arc<dyn TaxonomyRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            taxonomy_repo,
            article_repo,
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.taxonomy_repo.list_categories().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.taxonomy_repo.list_tags().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }

    pub async fn category_page(&self, category_id: i64) -> ApplicationResult<CategoryPage> {
        let id = CategoryId::new(category_id)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .taxonomy_repo
            .find_category(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let articles = self.article_repo.list_by_category(category.id).await?;

        Ok(CategoryPage {
            category: category.into(),
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn tag_page(&self, tag_id: i64) -> ApplicationResult<TagPage> {
        let id = TagId::new(tag_id).map_err(|_| ApplicationError::not_found("tag not found"))?;
        let tag = self
            .taxonomy_repo
            .find_tag(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let articles = self.article_repo.list_by_tag(tag.id).await?;

        Ok(TagPage {
            tag: tag.into(),
            articles: articles.into_iter().map(Into::into).collect(),
        })
    }
}
