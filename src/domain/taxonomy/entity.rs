// src/domain/taxonomy/entity.rs
use crate::domain::taxonomy::value_objects::{CategoryId, CategoryName, TagId, TagName};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub parent_id: Option<CategoryId>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub parent_id: Option<CategoryId>,
}

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
}
