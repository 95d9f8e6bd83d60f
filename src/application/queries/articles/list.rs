// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// All articles, newest first, for the homepage listing.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
