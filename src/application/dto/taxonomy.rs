// src/application/dto/taxonomy.rs
use crate::domain::taxonomy::{Category, Tag};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            parent_id: category.parent_id.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub category: CategoryDto,
    pub articles: Vec<crate::application::dto::ArticleDto>,
}

#[derive(Debug, Clone)]
pub struct TagPage {
    pub tag: TagDto,
    pub articles: Vec<crate::application::dto::ArticleDto>,
}
