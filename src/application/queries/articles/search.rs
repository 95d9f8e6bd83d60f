// src/application/queries/articles/search.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct SearchArticlesQuery {
    pub query: String,
}

impl ArticleQueryService {
    /// Title substring search. A blank query matches everything, mirroring
    /// the behaviour of an unfiltered ILIKE '%%'.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.search_by_title(query.query.trim()).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
