// src/application/queries/articles/detail.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{ArticlePage, EditPage, RevisionDto},
    error::{ApplicationError, ApplicationResult},
};

impl ArticleQueryService {
    /// The article detail page: latest revision rendered to HTML plus the
    /// article's categories and tags.
    pub async fn article_page(&self, article_id: i64) -> ApplicationResult<ArticlePage> {
        let article = self.require_article(article_id).await?;

        let latest = self.require_latest_revision(&article).await?;
        let rendered_html = self.renderer.render_html(latest.content.as_str());

        let categories = self.taxonomy_repo.categories_for_article(article.id).await?;
        let tags = self.taxonomy_repo.tags_for_article(article.id).await?;

        Ok(ArticlePage {
            article: article.into(),
            latest: latest.into(),
            rendered_html,
            categories: categories.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    /// The edit form's view of an article: its latest revision, unrendered.
    pub async fn edit_page(&self, article_id: i64) -> ApplicationResult<EditPage> {
        let article = self.require_article(article_id).await?;
        let latest: RevisionDto = self.require_latest_revision(&article).await?.into();

        Ok(EditPage {
            article: article.into(),
            latest,
        })
    }

    async fn require_latest_revision(
        &self,
        article: &crate::domain::article::Article,
    ) -> ApplicationResult<crate::domain::article::Revision> {
        // Creation writes the first revision in the same transaction as the
        // article row, so a missing revision indicates corrupted data.
        self.revision_repo
            .latest_for_article(article.id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("article has no revisions"))
    }
}
