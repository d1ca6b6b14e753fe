use mimalloc::MiMalloc;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trivia::config::Config;
use trivia::db::{SeedData, SeedOutcome};
use trivia::server::{TriviaState, trivia_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.basic.database_url,
        loglevel = %cfg.basic.loglevel,
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        seed_file = %cfg
            .basic
            .seed_file
            .as_ref()
            .map_or_else(|| "<none>".to_string(), |p| p.display().to_string()),
        cors_origins = ?cfg.cors.allowed_origins,
    );

    let db = trivia::db::spawn(&cfg.basic.database_url).await?;

    if let Some(seed_path) = cfg.basic.seed_file.as_ref() {
        match SeedData::load(seed_path).await {
            Ok(seed) => match seed.apply(&db).await {
                Ok(SeedOutcome::Applied {
                    categories,
                    questions,
                }) => info!(
                    path = %seed_path.display(),
                    categories,
                    questions,
                    "Seeded empty store."
                ),
                Ok(SeedOutcome::Skipped) => info!(
                    path = %seed_path.display(),
                    "Store already populated; seed skipped."
                ),
                Err(e) => warn!(path = %seed_path.display(), error = %e, "Failed to apply seed."),
            },
            Err(e) => warn!(path = %seed_path.display(), error = %e, "Failed to load seed file."),
        }
    }

    let state = TriviaState::new(db);
    let app = trivia_router(state, &cfg.cors);

    let addr = SocketAddr::from((cfg.basic.listen_addr, cfg.basic.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
