//! Centreboard - Collection Centre Directory Block
//!
//! Serves the read-only collection centre directory API together with
//! the embedded web editor for the centre block.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use centreboard::config;
use centreboard::directory;
use centreboard::server;

#[derive(Parser, Debug)]
#[command(name = "centreboard")]
#[command(author = "Centreboard Team")]
#[command(version)]
#[command(about = "Collection centre directory block", long_about = None)]
struct Cli {
    /// Port for the web UI and API
    #[arg(short, long, env = "CENTREBOARD_PORT")]
    port: Option<u16>,

    /// Path to an optional TOML settings file
    #[arg(short, long, env = "CENTREBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Don't open the browser automatically
    #[arg(long)]
    no_browser: bool,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Settings file fills in anything the CLI left unset; flags win
    let settings = match &cli.config {
        Some(path) => config::Settings::load(path)?,
        None => config::Settings::default(),
    };

    let port = cli.port.or(settings.port).unwrap_or(8080);
    let open_browser = !cli.no_browser && settings.open_browser.unwrap_or(true);

    let dir = directory::CentreDirectory::builtin();
    info!("Loaded directory with {} centres", dir.len());

    let ui_url = format!("http://127.0.0.1:{}", port);
    let server_handle = server::start_server(port, dir).await?;

    if open_browser {
        info!("Opening browser at {}", ui_url);
        if let Err(e) = open::that(&ui_url) {
            info!("Could not open browser: {} - visit {} manually", e, ui_url);
        }
    } else {
        info!("Web UI available at {}", ui_url);
    }

    server_handle.await??;

    Ok(())
}
