// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{IssuedSession, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub user: UserDto,
    pub session: IssuedSession,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let session = self.session_codec.issue(user.id, self.clock.now())?;

        Ok(LoginResult {
            user: user.into(),
            session,
        })
    }
}
