// tests/support/helpers.rs
use super::mocks::{
    ManualClock, MockArticleReadRepo, MockArticleWriteRepo, MockDb, MockRevisionRepo,
    MockTaxonomyRepo, MockUserRepo, PlainPasswordHasher,
};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

use makimono_core::application::ports::{
    ClockPort, MarkdownRendererPort, PasswordHasherPort, SessionCodecPort,
};
use makimono_core::application::services::ApplicationServices;
use makimono_core::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, RevisionRepository,
};
use makimono_core::domain::taxonomy::TaxonomyRepository;
use makimono_core::domain::user::UserRepository;
use makimono_core::infrastructure::markdown::CmarkRenderer;
use makimono_core::infrastructure::security::HmacSessionCodec;
use makimono_core::presentation::http::{routes, state::HttpState};

pub const TEST_SECRET: &str = "6d616b696d6f6e6f2d73657373696f6e2d7365637265742d3332627974657321";

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub db: Arc<MockDb>,
    pub clock: Arc<ManualClock>,
}

pub fn build_test_app() -> TestApp {
    let db = Arc::new(MockDb::new());
    let clock = ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

    let user_repo: Arc<dyn UserRepository> = Arc::new(MockUserRepo(Arc::clone(&db)));
    let article_write: Arc<dyn ArticleWriteRepository> =
        Arc::new(MockArticleWriteRepo(Arc::clone(&db)));
    let article_read: Arc<dyn ArticleReadRepository> =
        Arc::new(MockArticleReadRepo(Arc::clone(&db)));
    let revisions: Arc<dyn RevisionRepository> = Arc::new(MockRevisionRepo(Arc::clone(&db)));
    let taxonomy: Arc<dyn TaxonomyRepository> = Arc::new(MockTaxonomyRepo(Arc::clone(&db)));

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(PlainPasswordHasher);
    let session_codec: Arc<SessionCodecPort> = Arc::new(
        HmacSessionCodec::new(TEST_SECRET, std::time::Duration::from_secs(3600)).unwrap(),
    );
    let renderer: Arc<MarkdownRendererPort> = Arc::new(CmarkRenderer);
    let clock_port: Arc<ClockPort> = Arc::clone(&clock) as Arc<ClockPort>;

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        revisions,
        taxonomy,
        password_hasher,
        session_codec,
        renderer,
        clock_port,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
        site_name: "Makimono".into(),
    };

    TestApp {
        router: routes::build_router_with_rate_limiter(state, false),
        services,
        db,
        clock,
    }
}

pub fn form_request(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).expect("encode form body");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn form_request_with_cookie(uri: &str, cookie: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).expect("encode form body");
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_request_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

/// Pull the `session=...` pair out of a Set-Cookie response header, in the
/// form expected back in a Cookie request header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = raw.split(';').next()?.trim();
    if pair.starts_with("session=") && pair.len() > "session=".len() {
        Some(pair.to_string())
    } else {
        None
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read response body");
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn assert_redirect(response: &Response<Body>, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some(location)
    );
}

/// Register a user through the HTTP surface and hand back the session
/// cookie it was issued.
pub async fn register_user(router: &Router, username: &str, email: &str) -> String {
    use tower::util::ServiceExt as _;

    let response = router
        .clone()
        .oneshot(form_request(
            "/register",
            &[
                ("username", username),
                ("email", email),
                ("password", "correct horse battery"),
            ],
        ))
        .await
        .unwrap();

    assert_redirect(&response, "/");
    session_cookie(&response).expect("registration should set a session cookie")
}
