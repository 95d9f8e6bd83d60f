// src/presentation/http/controllers/articles.rs
use crate::application::commands::articles::{CreateArticleCommand, EditArticleCommand};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CurrentUser, MaybeUser};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{
    ArticleDetailTemplate, ArticleHistoryTemplate, EditArticleTemplate, NewArticleTemplate,
    Viewer, category_items, render, tag_items,
};
use axum::{
    Extension,
    extract::Path,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateArticleForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct EditArticleForm {
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
}

pub async fn new_article_form(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
) -> HttpResult<Html<String>> {
    let categories = state
        .services
        .taxonomy_queries
        .list_categories()
        .await
        .into_http()?;
    let tags = state.services.taxonomy_queries.list_tags().await.into_http()?;

    render(&NewArticleTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(Some(user)),
        categories: category_items(categories),
        tags: tag_items(tags),
    })
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<CreateArticleForm>,
) -> HttpResult<Response> {
    let command = CreateArticleCommand {
        title: form.title,
        content: form.content,
        category_ids: form.category_ids,
        tag_ids: form.tag_ids,
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok(Redirect::to("/").into_response())
}

pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let page = state
        .services
        .article_queries
        .article_page(id)
        .await
        .into_http()?;

    render(&ArticleDetailTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
        article: page.article.into(),
        edited_at: page.latest.edited_at.format("%Y-%m-%d %H:%M").to_string(),
        rendered_html: page.rendered_html,
        categories: category_items(page.categories),
        tags: tag_items(page.tags),
    })
}

pub async fn edit_article_form(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let page = state
        .services
        .article_queries
        .edit_page(id)
        .await
        .into_http()?;

    render(&EditArticleTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(Some(user)),
        article: page.article.into(),
        content: page.latest.content,
    })
}

pub async fn submit_article_edit(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Form(form): Form<EditArticleForm>,
) -> HttpResult<Response> {
    let command = EditArticleCommand {
        article_id: id,
        content: form.content,
        summary: form.summary,
    };

    state
        .services
        .article_commands
        .edit_article(&user, command)
        .await
        .into_http()?;

    Ok(Redirect::to("/").into_response())
}

pub async fn article_history(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let page = state
        .services
        .article_queries
        .history_page(id)
        .await
        .into_http()?;

    render(&ArticleHistoryTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
        article: page.article.into(),
        revisions: page.revisions.into_iter().map(Into::into).collect(),
    })
}
