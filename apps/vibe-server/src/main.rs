use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use vibe_infrastructure::{create_pool, run_migrations};
use vibe_shared::config::{AppConfig, CorsSettings};

mod bootstrap;

use bootstrap::Services;

#[derive(Parser, Debug)]
#[command(name = "vibe-server", version, about = "BachataVibe platform backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Use process-local storage instead of PostgreSQL
        #[arg(long, env = "VIBE_IN_MEMORY")]
        in_memory: bool,

        /// Load the reference content before serving
        #[arg(long)]
        seed: bool,
    },
    /// Load the reference content (menu, organization, styles, levels, site config)
    Seed,
    /// Apply database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _guard = vibe_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})", config.app.name, config.app.env);

    match cli.command.unwrap_or(Command::Serve { in_memory: false, seed: false }) {
        Command::Serve { in_memory, seed } => serve(config, in_memory, seed).await,
        Command::Seed => {
            let services = connect(&config).await?;
            let report = services.seeder().run().await?;
            info!("Seed complete: {} created, {} already present", report.created, report.existing);
            Ok(())
        }
        Command::Migrate => {
            let pool = create_pool(&config.database).await?;
            run_migrations(&pool).await?;
            Ok(())
        }
    }
}

async fn connect(config: &AppConfig) -> anyhow::Result<Services> {
    info!("Connecting to database...");
    let pool = create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool).await?;
    info!("Database connection established.");
    Ok(Services::postgres(pool))
}

async fn serve(config: AppConfig, in_memory: bool, seed: bool) -> anyhow::Result<()> {
    if in_memory && config.is_production() {
        anyhow::bail!("In-memory storage is not available in production");
    }

    let services = if in_memory {
        info!("Using in-memory storage");
        Services::in_memory()
    } else {
        connect(&config).await?
    };

    // An empty in-memory store has nothing to show.
    if seed || in_memory {
        services.seeder().run().await?;
    }

    let app = vibe_api::create_router(services.into_state(config.app.name.clone()))
        .layer(cors_layer(&config.cors)?);

    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn cors_layer(settings: &CorsSettings) -> anyhow::Result<CorsLayer> {
    let origins = settings
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
