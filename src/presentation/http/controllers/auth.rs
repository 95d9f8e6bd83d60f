// src/presentation/http/controllers/auth.rs
use crate::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use crate::application::dto::IssuedSession;
use crate::application::error::ApplicationError;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeUser, SESSION_COOKIE};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{LoginTemplate, RegisterTemplate, Viewer, render};
use axum::{
    Extension, Form,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Build the session cookie. Lifetime is enforced by the `exp` claim inside
/// the signed token, so the cookie itself is session-scoped.
fn session_cookie(session: &IssuedSession) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie
}

pub async fn register_form(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
) -> HttpResult<Html<String>> {
    render(&RegisterTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
    })
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> HttpResult<Response> {
    let command = RegisterUserCommand {
        username: form.username,
        email: form.email,
        password: form.password,
    };

    let result = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    let jar = jar.add(session_cookie(&result.session));
    Ok((jar, Redirect::to("/")).into_response())
}

pub async fn login_form(
    Extension(state): Extension<HttpState>,
    MaybeUser(user): MaybeUser,
) -> HttpResult<Html<String>> {
    render(&LoginTemplate {
        site_name: state.site_name.clone(),
        viewer: Viewer::from_session(user),
    })
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> HttpResult<Response> {
    let command = LoginUserCommand {
        username: form.username,
        password: form.password,
    };

    match state.services.user_commands.login(command).await {
        Ok(result) => {
            let jar = jar.add(session_cookie(&result.session));
            Ok((jar, Redirect::to("/")).into_response())
        }
        // Wrong credentials bounce back to the form instead of erroring.
        Err(ApplicationError::Unauthorized(_)) => Ok(Redirect::to("/login").into_response()),
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn logout(jar: CookieJar) -> Response {
    let jar = jar.remove(removal_cookie());
    (jar, Redirect::to("/")).into_response()
}
