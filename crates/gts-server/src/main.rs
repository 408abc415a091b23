use anyhow::Context;
use clap::Parser;
use gts_config::GtsConfig;
use gts_db::service::RegistryService;
use gts_server::cli::{Cli, Commands, ServeArgs};
use gts_server::{AppState, build_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("gts error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::Serve(args) => serve(&args).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GTS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn serve(args: &ServeArgs) -> anyhow::Result<()> {
    let mut config = GtsConfig::load_with_dotenv().context("failed to load configuration")?;
    args.apply(&mut config);
    config.server.validate()?;
    let addr = config.server.bind_addr()?;

    let service = RegistryService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path))?;
    let app = build_router(AppState::new(service, config.server));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, database = %config.database.path, "gts listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;
    tracing::info!("gts stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown requested");
}
