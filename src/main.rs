use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pavilion::models::AppConfig;
use pavilion::server;
use pavilion::services::PageBuilder;

#[derive(Parser)]
#[command(name = "pavilion")]
#[command(about = "Showcase server for a traditional Chinese garden design project")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render the page to a standalone HTML file
    Render {
        /// Output HTML file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Render { output }) => run_render_command(&output),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn load_config() -> Arc<AppConfig> {
    let config_file = std::env::var("CONFIG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.yaml"));
    Arc::new(AppConfig::load(&config_file))
}

fn media_dir_override() -> Option<PathBuf> {
    std::env::var("ASSETS_DIR").ok().map(PathBuf::from)
}

/// Render the page to a file (no server needed)
fn run_render_command(output: &PathBuf) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pavilion=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = load_config();
    let media_dir = media_dir_override().unwrap_or_else(|| config.media_dir.clone());

    // Offline output references the video relative to the media directory
    let media_base = media_dir.display().to_string();
    let builder = PageBuilder::new(config, media_dir, media_base)?;

    let page = builder.render_page()?;
    for warning in &page.warnings {
        eprintln!("warning: {warning}");
    }

    std::fs::write(output, &page.html)?;
    println!("Rendered {} ({} bytes)", output.display(), page.html.len());

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let assets_dir = std::env::var("ASSETS_DIR").ok();

    println!("Pavilion v{VERSION}");
    println!("Showcase server for a traditional Chinese garden design project\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("config.yaml (default)")
    );
    println!(
        "  ASSETS_DIR  = {}",
        assets_dir.as_deref().unwrap_or("(not set, from config)")
    );

    // Resolve config and media sources the same way the server would
    let config_path = PathBuf::from(config_file.as_deref().unwrap_or("config.yaml"));
    let config_source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults (file not found)".to_string()
    };

    let config = AppConfig::load(&config_path);
    let media_dir = assets_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.media_dir.clone());

    println!("\nAsset Sources:");
    println!("  Config: {config_source}");
    println!("  Media:  {}", media_dir.display());

    println!("\nMedia files:");
    let mut paths: Vec<PathBuf> = config
        .cards
        .iter()
        .filter_map(|c| c.image.clone().or_else(|| c.video.clone()))
        .collect();
    paths.insert(0, config.background.image.clone());
    for path in paths {
        let marker = if media_dir.join(&path).exists() {
            "ok     "
        } else {
            "missing"
        };
        println!("  [{marker}] {}", path.display());
    }

    println!("\nCommands:");
    println!("  pavilion serve    Start the HTTP server");
    println!("  pavilion render   Render the page to an HTML file");
    println!("\nRun 'pavilion --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pavilion=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = load_config();
    let state = server::create_app_state(config, media_dir_override())?;

    tracing::info!(
        media = %state.media_dir.display(),
        "Asset sources configured"
    );
    if !state.media_dir.exists() {
        tracing::warn!(
            media = %state.media_dir.display(),
            "Media directory does not exist; the page will render with fallbacks"
        );
    }

    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Pavilion server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
