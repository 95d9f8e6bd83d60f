// src/application/queries/articles/history.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{HistoryPage, RevisionView},
    error::ApplicationResult,
};

impl ArticleQueryService {
    /// Full revision history, newest first, each revision rendered to HTML
    /// the same way the detail page renders the latest one.
    pub async fn history_page(&self, article_id: i64) -> ApplicationResult<HistoryPage> {
        let article = self.require_article(article_id).await?;

        let revisions = self
            .revision_repo
            .list_for_article(article.id)
            .await?
            .into_iter()
            .map(|revision| {
                let rendered_html = self.renderer.render_html(revision.content.as_str());
                RevisionView {
                    revision: revision.into(),
                    rendered_html,
                }
            })
            .collect();

        Ok(HistoryPage {
            article: article.into(),
            revisions,
        })
    }
}
