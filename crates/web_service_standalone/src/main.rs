use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Focus Factory plan-generation service.
#[derive(Parser, Debug)]
#[command(name = "focus-factory")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "APP_PORT", default_value_t = 8080)]
    port: u16,

    /// Directory for persisted focus sessions.
    #[arg(long, env = "APP_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false),
        )
        .init();

    tracing::info!("Starting standalone web service...");

    if let Err(e) = web_service::server::run(args.data_dir, args.port).await {
        tracing::error!("Failed to run web service: {}", e);
        std::process::exit(1);
    }
}
