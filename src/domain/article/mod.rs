// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod revision;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, RevisionRepository};
pub use revision::{NewRevision, Revision};
pub use value_objects::{ArticleId, ArticleTitle, RevisionContent, RevisionId, RevisionSummary};
