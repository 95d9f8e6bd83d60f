// src/application/commands/articles/edit.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RevisionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, NewRevision, RevisionContent, RevisionSummary},
};

pub const EDIT_SUMMARY_FALLBACK: &str = "Updated content";

pub struct EditArticleCommand {
    pub article_id: i64,
    pub content: String,
    pub summary: Option<String>,
}

impl ArticleCommandService {
    /// Record an edit as a fresh revision. Existing revisions are never
    /// touched; the appended one becomes the article's current content.
    pub async fn edit_article(
        &self,
        actor: &AuthenticatedUser,
        command: EditArticleCommand,
    ) -> ApplicationResult<RevisionDto> {
        let article_id = ArticleId::new(command.article_id)?;

        let article = self
            .read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let content = RevisionContent::new(command.content)?;
        let summary = RevisionSummary::or_default(command.summary, EDIT_SUMMARY_FALLBACK);

        let revision = NewRevision {
            article_id: article.id,
            content,
            edited_by: actor.id,
            edited_at: self.clock.now(),
            summary,
        };

        let appended = self.revision_repo.append(revision).await?;
        Ok(appended.into())
    }
}
