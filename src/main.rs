// src/main.rs
use makimono_core::application::{
    ports::{ClockPort, MarkdownRendererPort, PasswordHasherPort, SessionCodecPort},
    services::ApplicationServices,
};
use makimono_core::config::AppConfig;
use makimono_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository, RevisionRepository},
    taxonomy::TaxonomyRepository,
    user::UserRepository,
};
use makimono_core::infrastructure::{
    database,
    markdown::CmarkRenderer,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresRevisionRepository,
        PostgresTaxonomyRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, HmacSessionCodec},
    time::SystemClock,
};
use makimono_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let revision_repo: Arc<dyn RevisionRepository> =
        Arc::new(PostgresRevisionRepository::new(pool.clone()));
    let taxonomy_repo: Arc<dyn TaxonomyRepository> =
        Arc::new(PostgresTaxonomyRepository::new(pool.clone()));

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher::default());
    let session_codec: Arc<SessionCodecPort> = Arc::new(HmacSessionCodec::new(
        config.session_secret(),
        config.session_ttl(),
    )?);
    let renderer: Arc<MarkdownRendererPort> = Arc::new(CmarkRenderer::default());
    let clock: Arc<ClockPort> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write_repo,
        article_read_repo,
        revision_repo,
        taxonomy_repo,
        password_hasher,
        session_codec,
        renderer,
        clock,
    ));

    let state = HttpState {
        services,
        site_name: config.site_name().to_string(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
