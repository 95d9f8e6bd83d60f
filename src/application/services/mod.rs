// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, taxonomy::TaxonomyCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{ClockPort, MarkdownRendererPort, PasswordHasherPort, SessionCodecPort},
        queries::{articles::ArticleQueryService, taxonomy::TaxonomyQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, RevisionRepository},
        taxonomy::TaxonomyRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
    user_repo: Arc<dyn UserRepository>,
    session_codec: Arc<SessionCodecPort>,
    clock: Arc<ClockPort>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        revision_repo: Arc<dyn RevisionRepository>,
        taxonomy_repo: Arc<dyn TaxonomyRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        session_codec: Arc<SessionCodecPort>,
        renderer: Arc<MarkdownRendererPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&session_codec),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&revision_repo),
            Arc::clone(&clock),
        ));

        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(Arc::clone(&taxonomy_repo)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&revision_repo),
            Arc::clone(&taxonomy_repo),
            Arc::clone(&renderer),
        ));

        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(
            Arc::clone(&taxonomy_repo),
            Arc::clone(&article_read_repo),
        ));

        Self {
            user_commands,
            article_commands,
            taxonomy_commands,
            article_queries,
            taxonomy_queries,
            user_repo,
            session_codec,
            clock,
        }
    }

    pub fn session_codec(&self) -> Arc<SessionCodecPort> {
        Arc::clone(&self.session_codec)
    }

    /// Verify a session cookie value and load the user it names. The cookie
    /// carries no server-side state, so the user row is re-read here; a
    /// deactivated or deleted account fails authentication even while its
    /// cookie is still within its validity window.
    pub async fn resolve_session(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let now = self.clock.now();
        let claims = self.session_codec.verify(token, now)?;

        let user_id = claims
            .user_id()
            .map_err(|_| ApplicationError::unauthorized("invalid session"))?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown user"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        let issued_at = claims
            .issued_at()
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))?;
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| ApplicationError::unauthorized("invalid session"))?;

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username.to_string(),
            role: user.role,
            issued_at,
            expires_at,
        })
    }
}
