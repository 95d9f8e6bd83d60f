// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::MarkdownRendererPort,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, RevisionRepository},
        taxonomy::TaxonomyRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) revision_repo: Arc<dyn RevisionRepository>,
    pub(super) taxonomy_repo: Arc<dyn TaxonomyRepository>,
    pub(super) renderer: Arc<MarkdownRendererPort>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        revision_repo: Arc<dyn RevisionRepository>,
        taxonomy_repo: Arc<dyn TaxonomyRepository>,
        renderer: Arc<MarkdownRendererPort>,
    ) -> Self {
        Self {
            read_repo,
            revision_repo,
            taxonomy_repo,
            renderer,
        }
    }

    pub(super) async fn require_article(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
