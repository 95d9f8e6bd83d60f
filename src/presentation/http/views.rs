// src/presentation/http/views.rs
use crate::application::dto::{ArticleDto, AuthenticatedUser, CategoryDto, RevisionView, TagDto};
use crate::presentation::http::error::{HttpError, HttpResult};
use askama::Template;
use axum::response::Html;
use chrono::{DateTime, Utc};

/// The signed-in user as the page header shows it.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub username: String,
    pub is_admin: bool,
}

impl Viewer {
    pub fn from_session(user: Option<AuthenticatedUser>) -> Option<Self> {
        user.map(|user| Self {
            is_admin: user.is_admin(),
            username: user.username,
        })
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Debug, Clone)]
pub struct ArticleItem {
    pub id: i64,
    pub title: String,
    pub is_redirect: bool,
    pub created_at: String,
}

impl From<ArticleDto> for ArticleItem {
    fn from(article: ArticleDto) -> Self {
        Self {
            id: article.id,
            title: article.title,
            is_redirect: article.is_redirect,
            created_at: format_timestamp(article.created_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryItem {
    pub id: i64,
    pub name: String,
}

impl From<CategoryDto> for CategoryItem {
    fn from(category: CategoryDto) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TagItem {
    pub id: i64,
    pub name: String,
}

impl From<TagDto> for TagItem {
    fn from(tag: TagDto) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevisionItem {
    pub summary: String,
    pub edited_by: i64,
    pub edited_at: String,
    pub rendered_html: String,
}

impl From<RevisionView> for RevisionItem {
    fn from(view: RevisionView) -> Self {
        Self {
            summary: view.revision.summary,
            edited_by: view.revision.edited_by,
            edited_at: format_timestamp(view.revision.edited_at),
            rendered_html: view.rendered_html,
        }
    }
}

pub fn article_items(articles: Vec<ArticleDto>) -> Vec<ArticleItem> {
    articles.into_iter().map(Into::into).collect()
}

pub fn category_items(categories: Vec<CategoryDto>) -> Vec<CategoryItem> {
    categories.into_iter().map(Into::into).collect()
}

pub fn tag_items(tags: Vec<TagDto>) -> Vec<TagItem> {
    tags.into_iter().map(Into::into).collect()
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub articles: Vec<ArticleItem>,
    pub categories: Vec<CategoryItem>,
}

#[derive(Template)]
#[template(path = "search_results.html")]
pub struct SearchTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub query: String,
    pub articles: Vec<ArticleItem>,
}

#[derive(Template)]
#[template(path = "article_detail.html")]
pub struct ArticleDetailTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub article: ArticleItem,
    pub edited_at: String,
    pub rendered_html: String,
    pub categories: Vec<CategoryItem>,
    pub tags: Vec<TagItem>,
}

#[derive(Template)]
#[template(path = "article_history.html")]
pub struct ArticleHistoryTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub article: ArticleItem,
    pub revisions: Vec<RevisionItem>,
}

#[derive(Template)]
#[template(path = "new_article.html")]
pub struct NewArticleTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub categories: Vec<CategoryItem>,
    pub tags: Vec<TagItem>,
}

#[derive(Template)]
#[template(path = "edit_article.html")]
pub struct EditArticleTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub article: ArticleItem,
    pub content: String,
}

#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub category: CategoryItem,
    pub articles: Vec<ArticleItem>,
}

#[derive(Template)]
#[template(path = "tag.html")]
pub struct TagTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
    pub tag: TagItem,
    pub articles: Vec<ArticleItem>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub site_name: String,
    pub viewer: Option<Viewer>,
}

/// Render a template into an HTML response, mapping askama failures onto
/// the shared HTTP error type.
pub fn render<T: Template>(template: &T) -> HttpResult<Html<String>> {
    template.render().map(Html).map_err(|err| {
        tracing::error!(error = %err, "template rendering failed");
        HttpError::from_error(crate::application::error::ApplicationError::infrastructure(
            "template rendering failed",
        ))
    })
}
