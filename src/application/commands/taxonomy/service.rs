// src/application/commands/taxonomy/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::authorize::ensure_admin,
        dto::{AuthenticatedUser, CategoryDto, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::taxonomy::{CategoryId, CategoryName, NewCategory, NewTag, TagName, TaxonomyRepository},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub parent_id: Option<i64>,
}

pub struct CreateTagCommand {
    pub name: String,
}

pub struct TaxonomyCommandService {
    taxonomy_repo: Arc<dyn TaxonomyRepository>,
}

impl TaxonomyCommandService {
    pub fn new(taxonomy_repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { taxonomy_repo }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_admin(actor)?;

        let name = CategoryName::new(command.name)?;
        let parent_id = command.parent_id.map(CategoryId::new).transpose()?;

        if let Some(parent) = parent_id {
            if self.taxonomy_repo.find_category(parent).await?.is_none() {
                return Err(ApplicationError::not_found("parent category not found"));
            }
        }

        let category = self
            .taxonomy_repo
            .insert_category(NewCategory { name, parent_id })
            .await?;
        Ok(category.into())
    }

    pub async fn create_tag(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTagCommand,
    ) -> ApplicationResult<TagDto> {
        ensure_admin(actor)?;

        let name = TagName::new(command.name)?;
        let tag = self.taxonomy_repo.insert_tag(NewTag { name }).await?;
        Ok(tag.into())
    }
}
