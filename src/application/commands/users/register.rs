// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{IssuedSession, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct RegisterResult {
    pub user: UserDto,
    pub session: IssuedSession,
}

impl UserCommandService {
    /// Create an account and log it in. The very first account becomes the
    /// site admin; everyone after that registers as a regular user.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<RegisterResult> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_identity_available(&username, &email).await?;

        let role = if self.user_repo.count().await? == 0 {
            Role::Admin
        } else {
            Role::User
        };

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let now = self.clock.now();
        let new_user = NewUser::new(username, email, password_hash, role, now);
        let user = self.user_repo.insert(new_user).await?;

        let session = self.session_codec.issue(user.id, now)?;

        Ok(RegisterResult {
            user: user.into(),
            session,
        })
    }

    async fn ensure_identity_available(
        &self,
        username: &Username,
        email: &EmailAddress,
    ) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }
        Ok(())
    }
}
