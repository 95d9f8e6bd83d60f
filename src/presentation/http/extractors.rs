// src/presentation/http/extractors.rs
use crate::{application::dto::AuthenticatedUser, presentation::http::state::HttpState};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

pub const SESSION_COOKIE: &str = "session";

/// Extractor for pages that require a signed-in user. Requests without a
/// valid session are bounced to the login form, mirroring how the site
/// treats every protected page.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

/// Extractor for pages that render differently for signed-in users but are
/// public either way. A missing, expired, or tampered cookie simply yields
/// an anonymous view.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthenticatedUser>);

pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

async fn session_user(parts: &mut Parts) -> Option<AuthenticatedUser> {
    let Ok(Extension(state)) = Extension::<HttpState>::from_request_parts(parts, &()).await else {
        return None;
    };

    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(SESSION_COOKIE)?.value().to_string();

    state.services.resolve_session(&token).await.ok()
}

impl FromRequestParts<()> for CurrentUser {
    type Rejection = LoginRedirect;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        session_user(parts).await.map(Self).ok_or(LoginRedirect)
    }
}

impl FromRequestParts<()> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &()) -> Result<Self, Self::Rejection> {
        Ok(Self(session_user(parts).await))
    }
}
