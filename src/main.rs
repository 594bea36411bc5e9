use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use penguin_api::config::Config;
use penguin_api::context::AppContext;
use penguin_api::{api, fetch};

#[derive(Parser)]
#[command(name = "pengu")]
#[command(about = "Penguin species classification API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the prediction server
    Serve {
        /// Port for the HTTP API; overrides the PORT environment variable
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "penguin_api=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let port_override = match cli.command {
        Some(Commands::Serve { port }) => port,
        None => None,
    };

    // Startup is strictly sequential: config, fetch, load, then listen.
    // Any failure before the bind aborts the process with a non-zero exit.
    let config = Config::from_env()?;
    let port = port_override.unwrap_or(config.port);

    fetch::download_artifact(&config).await?;
    let context = AppContext::load(&config.data_dir)?;

    let app = api::create_router(Arc::new(context));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("penguin classifier listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
