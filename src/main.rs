use anyhow::{Context, Result};
use news_service::{
    application::{ports::security::AccessTokenVerifier, services::ApplicationServices},
    config::{AppConfig, LogFormat},
    domain::news::{NewsReadRepository, NewsWriteRepository},
    infrastructure::{
        database, repositories::PostgresNewsRepository, security::token::StaticTokenVerifier,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::{signal, sync::oneshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format());

    let pool = database::init_pool(
        config.database_url(),
        config.database_max_connections(),
        config.database_acquire_timeout(),
    )
    .await
    .context("failed to connect to database")?;
    database::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    tracing::info!("database ready");

    let news_repo = Arc::new(PostgresNewsRepository::new(pool.clone()));
    let news_write_repo: Arc<dyn NewsWriteRepository> = news_repo.clone();
    let news_read_repo: Arc<dyn NewsReadRepository> = news_repo;
    let token_verifier: Arc<dyn AccessTokenVerifier> =
        Arc::new(StaticTokenVerifier::new(config.bearer_token()));

    let services = Arc::new(ApplicationServices::new(
        news_write_repo,
        news_read_repo,
        token_verifier,
    ));
    let app = build_router(HttpState { services });

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                stop_rx.await.ok();
            })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("server task panicked")??;
            pool.close().await;
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    stop_tx.send(()).ok();
    match tokio::time::timeout(config.shutdown_timeout(), &mut server).await {
        Ok(joined) => joined.context("server task panicked")??,
        Err(_) => {
            tracing::error!(
                timeout_secs = config.shutdown_timeout().as_secs(),
                "graceful shutdown timed out, aborting in-flight requests"
            );
            server.abort();
        }
    }

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(env_filter));

    let initialised = match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    if initialised.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
