//! Fox AI chat server binary.
//!
//! Serves the chat proxy, the status probe and the browser UI. Configuration
//! is read once here and handed to the router.

use std::path::PathBuf;

use clap::Parser;
use fox_api::config::ApiConfig;
use fox_core::mode::Mode;
use fox_core::upstream::DEFAULT_BASE_URL;
use tracing::{info, warn};

mod shutdown;

/// CLI arguments for the chat server.
#[derive(Parser, Debug)]
#[command(name = "fox_server", about = "Fox AI chat server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Host to bind.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Upstream chat-completion API root.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    openai_base_url: String,

    /// Directory with the browser UI.
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fox_api=debug,fox_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    // Mode flags and the key come from the environment only.
    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        openai_base_url: args.openai_base_url,
        static_dir: args.static_dir,
        ..ApiConfig::from_env()
    };

    if !config.static_dir.join("index.html").is_file() {
        warn!(static_dir = %config.static_dir.display(), "index.html not found, UI will not load");
    }

    let mode = config.server_mode();
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "Server listening on http://localhost:{}", local_addr.port());
    if config.mode.mock_openai {
        info!("Mode: {mode} (MOCK_OPENAI=1 set)");
    } else {
        info!("Mode: {mode}");
    }
    if mode == Mode::Mock && !config.mode.use_openai {
        info!("Default mock mode active, no OpenAI credits will be used unless you start with USE_OPENAI=1");
    }

    let app = fox_api::router(fox_api::AppState::new(config));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}
