// src/presentation/http/controllers/pages.rs
use crate::application::queries::articles::SearchArticlesQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeUser;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{
    HomeTemplate, SearchTemplate, Viewer, article_items, category_items, render,
};
use axum::{Extension, extract::Query, response::Html};
use serde::Deserialize;

pub async fn home(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;
    let categories = state
        .services
        .taxonomy_queries
        .list_categories()
        .await
        .into_http()?;

    render(&HomeTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
        articles: article_items(articles),
        categories: category_items(categories),
    })
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    Query(params): Query<SearchParams>,
) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            query: params.q.clone(),
        })
        .await
        .into_http()?;

    render(&SearchTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
        query: params.q,
        articles: article_items(articles),
    })
}
