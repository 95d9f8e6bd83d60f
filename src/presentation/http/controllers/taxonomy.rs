// src/presentation/http/controllers/taxonomy.rs
use crate::application::commands::taxonomy::{CreateCategoryCommand, CreateTagCommand};
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CurrentUser, MaybeUser};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{
    CategoryTemplate, TagTemplate, Viewer, article_items, render,
};
use axum::{
    Extension, Form,
    extract::Path,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryForm {
    pub name: String,
    // Submitted as an empty string when no parent is chosen.
    #[serde(default)]
    pub parent_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTagForm {
    pub name: String,
}

pub async fn category_view(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let page = state
        .services
        .taxonomy_queries
        .category_page(id)
        .await
        .into_http()?;

    render(&CategoryTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
        category: page.category.into(),
        articles: article_items(page.articles),
    })
}

pub async fn tag_view(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<i64>,
) -> HttpResult<Html<String>> {
    let page = state
        .services
        .taxonomy_queries
        .tag_page(id)
        .await
        .into_http()?;

    render(&TagTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
        tag: page.tag.into(),
        articles: article_items(page.articles),
    })
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<CreateCategoryForm>,
) -> HttpResult<Response> {
    let parent_id = form
        .parent_id
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::parse::<i64>)
        .transpose()
        .map_err(|_| {
            HttpError::from_error(ApplicationError::validation("parent_id must be an integer"))
        })?;

    let command = CreateCategoryCommand {
        name: form.name,
        parent_id,
    };

    state
        .services
        .taxonomy_commands
        .create_category(&user, command)
        .await
        .into_http()?;

    Ok(Redirect::to("/").into_response())
}

pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<CreateTagForm>,
) -> HttpResult<Response> {
    state
        .services
        .taxonomy_commands
        .create_tag(&user, CreateTagCommand { name: form.name })
        .await
        .into_http()?;

    Ok(Redirect::to("/").into_response())
}
