// src/application/commands/authorize.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub(super) fn ensure_admin(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "administrative privileges are required",
        ))
    }
}
