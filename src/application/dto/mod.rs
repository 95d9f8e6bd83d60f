// src/application/dto/mod.rs
pub mod articles;
pub mod auth;
pub mod taxonomy;
pub mod users;

pub use articles::{ArticleDto, ArticlePage, EditPage, HistoryPage, RevisionDto, RevisionView};
pub use auth::{AuthenticatedUser, IssuedSession, SessionClaims};
pub use taxonomy::{CategoryDto, CategoryPage, TagDto, TagPage};
pub use users::UserDto;
