use crate::domain::origin::OriginPolicy;
use crate::frameworks::config::Config;
use crate::interface_adapters::clients::{MailerClient, RendererClient};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, LogSink};
use std::net::SocketAddr;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::from_env();
    tracing::debug!(
        renderer_url = %config.renderer_url,
        mailer_url = %config.mailer_url,
        "collaborator clients configured."
    );

    let renderer = Arc::new(RendererClient::new(config.renderer_url.clone()));
    let mailer = Arc::new(MailerClient::new(config.mailer_url.clone()));
    let origins = OriginPolicy::new(config.allowed_origins());

    let state = Arc::new(AppState {
        renderer,
        mailer,
        sink: Arc::new(LogSink),
        origins,
    });

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "listening");

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };

    // Serve app and report errors rather than panicking.
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
