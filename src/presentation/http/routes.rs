// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, auth, pages, taxonomy};
use crate::presentation::http::middleware::rate_limit::rate_limit_layer;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Router construction with the rate limiter made optional so tests can
/// drive the credential endpoints without real peer addresses.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let mut credential_routes = Router::new()
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login));

    if rate_limit {
        credential_routes = credential_routes.layer(rate_limit_layer());
    }

    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(health))
        .route("/search", get(pages::search))
        .merge(credential_routes)
        .route("/logout", get(auth::logout))
        .route(
            "/articles/new",
            get(articles::new_article_form).post(articles::create_article),
        )
        .route("/articles/{id}", get(articles::article_detail))
        .route(
            "/articles/{id}/edit",
            get(articles::edit_article_form).post(articles::submit_article_edit),
        )
        .route("/articles/{id}/history", get(articles::article_history))
        .route("/categories/new", post(taxonomy::create_category))
        .route("/categories/{id}", get(taxonomy::category_view))
        .route("/tags/new", post(taxonomy::create_tag))
        .route("/tags/{id}", get(taxonomy::tag_view))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
