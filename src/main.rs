//! noon-scraper - Stateless noon.com product page scrape service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use noon_scraper::config::Config;
use noon_scraper::noon::{self, NoonClient};
use noon_scraper::server;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "noon-scraper",
    version,
    about = "Stateless noon.com product page scrape service",
    long_about = "Fetches a noon.com product page with TLS fingerprint emulation and extracts \
                  structured fields (sales volume, brand/seller links, specifications)."
)]
struct Cli {
    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "NOON_PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP scrape service
    Serve {
        /// Bind address
        #[arg(long, env = "NOON_HOST")]
        host: Option<String>,

        /// Bind port
        #[arg(short, long, env = "NOON_PORT")]
        port: Option<u16>,
    },

    /// Scrape a single product page and print the result as JSON
    #[command(alias = "s")]
    Scrape {
        /// Product page URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            server::serve(&config).await?;
        }

        Commands::Scrape { url } => {
            let client = NoonClient::new(&config)?;
            let product = noon::scrape(&client, &url).await?;
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
    }

    Ok(())
}
