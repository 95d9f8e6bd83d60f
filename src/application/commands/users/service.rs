// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ClockPort, PasswordHasherPort, SessionCodecPort},
    domain::user::UserRepository,
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) session_codec: Arc<SessionCodecPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        session_codec: Arc<SessionCodecPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            session_codec,
            clock,
        }
    }
}
