use csgo_api::{
    config::Config,
    domain::catalog::language::{Language, SUPPORTED_LANGUAGES},
    infrastructure::{
        loader::{ensure_data_dir, preload},
        repositories::json_file_repository::JsonFileRepository,
    },
    presentation::http::{routes::create_app, state::AppState},
};
use anyhow::Context;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,csgo_api=debug,tower_http=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    ensure_data_dir(&config.data_dir)?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        cache = ?config.cache_policy,
        "Serving catalog documents"
    );

    let repository = Arc::new(JsonFileRepository::new(
        config.data_dir.clone(),
        config.cache_policy,
    ));

    if config.preload_data {
        let languages: Vec<Language> = Language::all().collect();
        preload(repository.as_ref(), &languages)
            .await
            .context("Error loading data")?;
        tracing::info!("Data loaded successfully");
    }

    let state = AppState {
        catalog: repository,
    };
    let app = create_app(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on port {}", config.port);
    tracing::info!("API available at http://localhost:{}/api/{{language}}/", config.port);
    tracing::info!("Supported languages: {}", SUPPORTED_LANGUAGES.join(", "));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
