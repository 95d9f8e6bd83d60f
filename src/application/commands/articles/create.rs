// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleTitle, NewArticle, RevisionContent, RevisionSummary},
        taxonomy::{CategoryId, TagId},
    },
};

pub const INITIAL_SUMMARY: &str = "Initial version";

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
}

impl ArticleCommandService {
    /// Create an article together with its "Initial version" revision and
    /// its taxonomy links. The repository persists all of it in one
    /// transaction, so no article is ever visible without a revision.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = RevisionContent::new(command.content)?;

        if self.read_repo.find_by_title(&title).await?.is_some() {
            return Err(ApplicationError::conflict("an article with this title already exists"));
        }

        let category_ids = command
            .category_ids
            .into_iter()
            .map(CategoryId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let tag_ids = command
            .tag_ids
            .into_iter()
            .map(TagId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let new_article = NewArticle {
            title,
            is_redirect: false,
            created_by: actor.id,
            created_at: self.clock.now(),
            content,
            summary: RevisionSummary::new(INITIAL_SUMMARY),
            category_ids,
            tag_ids,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
