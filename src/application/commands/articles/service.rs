// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::ClockPort,
    domain::article::{ArticleReadRepository, ArticleWriteRepository, RevisionRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) revision_repo: Arc<dyn RevisionRepository>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        revision_repo: Arc<dyn RevisionRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            revision_repo,
            clock,
        }
    }
}
