// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_revision;
mod postgres_taxonomy;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_revision::PostgresRevisionRepository;
pub use postgres_taxonomy::PostgresTaxonomyRepository;
pub use postgres_user::PostgresUserRepository;
