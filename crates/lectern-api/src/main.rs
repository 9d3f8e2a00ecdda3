//! Lectern REST API entry point.
//!
//! Binary name: `lectern`
//!
//! Parses CLI arguments (environment-backed for deployment), builds the
//! provider from the immutable startup configuration, and serves the
//! API with graceful shutdown.

mod http;
mod state;

use std::sync::Arc;

use clap::Parser;

use lectern_infra::llm::openai_compat::OpenAiCompatibleProvider;
use lectern_infra::llm::openai_compat::config::gemini_defaults;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "lectern", version, about = "Streaming summarization and personalization API")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind.
    #[arg(long, default_value_t = 8000, env = "LECTERN_PORT")]
    port: u16,

    /// API key for the LLM provider.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model identifier.
    #[arg(long, env = "LECTERN_MODEL", default_value = "gemini-2.0-flash")]
    model: String,

    /// Override the provider base URL (any OpenAI-compatible endpoint).
    #[arg(long, env = "LECTERN_BASE_URL")]
    base_url: Option<String>,

    /// Export spans via OpenTelemetry (stdout exporter).
    #[arg(long)]
    otel: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    lectern_observe::tracing_setup::init_tracing(cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // One immutable provider configuration, built once and passed inward.
    let mut config = gemini_defaults(&cli.api_key, &cli.model);
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let model = config.model.clone();
    let max_output_tokens = config.max_output_tokens;
    let provider_name = config.provider_name.clone();
    let provider = Arc::new(OpenAiCompatibleProvider::new(config));
    let state = AppState::new(provider, model.clone(), max_output_tokens);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, provider = %provider_name, model = %model, "lectern API listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    lectern_observe::tracing_setup::shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
