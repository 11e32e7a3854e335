//! edge-prerender
//!
//! Runs the viewer and origin stages of the pre-rendering pipeline locally,
//! either once against an event file or as an invocation service.
//!
//! # Architecture Overview
//!
//! ```text
//!   client ──▶ viewer request ──────────────▶ origin request ──▶ origin fetch
//!              ┌──────────────┐  x-target     ┌──────────────┐
//!              │  classify    │  x-should-    │ OriginRouter │
//!              │ bots/suffix  │  render       │  fail-open   │
//!              └──────────────┘ ────────────▶ └──────┬───────┘
//!                                                    │ GET /render?url=
//!                                                    ▼
//!                                             rendering service
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use edge_prerender::classify::{should_render, target_url};
use edge_prerender::config::{load_config, read_config, PrerenderConfig};
use edge_prerender::edge::EdgeEvent;
use edge_prerender::observability::{logging, metrics};
use edge_prerender::pipeline::{handle_origin_request, handle_viewer_request};
use edge_prerender::{HttpRenderClient, HttpServer, OriginRouter, Shutdown};

#[derive(Parser)]
#[command(name = "edge-prerender")]
#[command(about = "Bot classification and pre-render routing for edge request handlers", long_about = None)]
struct Cli {
    /// TOML configuration file. WRENDERER_* environment variables override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the viewer-request stage on an edge event
    Viewer {
        /// Event JSON file (stdin when omitted)
        #[arg(short, long)]
        event: Option<PathBuf>,
    },
    /// Run the origin-request stage on an edge event
    Origin {
        /// Event JSON file (stdin when omitted)
        #[arg(short, long)]
        event: Option<PathBuf>,
    },
    /// Print the classification for a user agent and URI
    Classify {
        #[arg(short, long)]
        user_agent: String,
        #[arg(long, default_value = "/")]
        uri: String,
        #[arg(long, default_value = "localhost")]
        host: String,
        #[arg(short, long, default_value = "")]
        querystring: String,
    },
    /// Serve both stages over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Origin { .. } | Commands::Serve => load_config(cli.config.as_deref())?,
        _ => read_config(cli.config.as_deref())?,
    };
    logging::init_logging(&config.observability);

    match cli.command {
        Commands::Viewer { event } => {
            let event = read_event(event.as_deref())?;
            let request = handle_viewer_request(event)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Origin { event } => {
            let event = read_event(event.as_deref())?;
            let client = HttpRenderClient::new(&config.renderer, &config.retries)?;
            let router = OriginRouter::from_config(client, &config);
            let request = handle_origin_request(event, &router).await?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Classify {
            user_agent,
            uri,
            host,
            querystring,
        } => {
            let decision = serde_json::json!({
                "x-target": target_url(&host, &uri, &querystring),
                "x-should-render": should_render(&user_agent, &uri).to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        Commands::Serve => serve(config).await?,
    }

    Ok(())
}

async fn serve(config: PrerenderConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("edge-prerender v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        renderer = %config.renderer.domain,
        timeout_secs = config.renderer.timeout_secs,
        max_attempts = config.retries.effective_attempts(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn read_event(path: Option<&Path>) -> Result<EdgeEvent, Box<dyn std::error::Error>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    Ok(EdgeEvent::from_json(&raw)?)
}
