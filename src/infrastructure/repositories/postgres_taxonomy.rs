// src/infrastructure/repositories/postgres_taxonomy.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{
    Category, CategoryId, CategoryName, NewCategory, NewTag, Tag, TagId, TagName,
    TaxonomyRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTaxonomyRepository {
    pool: PgPool,
}

impl PostgresTaxonomyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    parent_id: Option<i64>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            parent_id: row.parent_id.map(CategoryId::new).transpose()?,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
        })
    }
}

#[async_trait]
impl TaxonomyRepository for PostgresTaxonomyRepository {
    async fn insert_category(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, parent_id) VALUES ($1, $2)
             RETURNING id, name, parent_id",
        )
        .bind(category.name.as_str())
        .bind(category.parent_id.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn insert_tag(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name) VALUES ($1) RETURNING id, name",
        )
        .bind(tag.name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn find_category(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, parent_id FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_tag(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, parent_id FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn list_tags(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn categories_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id, c.name, c.parent_id FROM categories c
             JOIN article_categories ac ON ac.category_id = c.id
             WHERE ac.article_id = $1
             ORDER BY c.name",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn tags_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT t.id, t.name FROM tags t
             JOIN article_tags at ON at.tag_id = t.id
             WHERE at.article_id = $1
             ORDER BY t.name",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
