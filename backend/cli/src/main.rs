mod config;
mod practice;

use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use standfast_core::ScenarioId;
use standfast_relay::{serve, RelayState};

use config::Config;

#[derive(Parser)]
#[command(name = "standfast")]
#[command(about = "Standfast — conversation practice scenarios over a chat relay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the chat relay server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run an interactive practice session against a relay
    Practice {
        /// Scenario id (see `--list`)
        #[arg(short, long, default_value = "boyfriend-level-1")]
        scenario: String,
        /// Relay base URL
        #[arg(long)]
        relay_url: Option<String>,
        /// List scenario ids and exit
        #[arg(long)]
        list: bool,
    },
    /// Check a running relay's health endpoint
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            standfast_logging::init_logger(&config.log_dir, &config.log_level);
            let addr: SocketAddr =
                format!("{}:{}", config.bind_address, port.unwrap_or(config.port)).parse()?;
            info!(%addr, "starting chat relay");
            serve(addr, RelayState::default()).await?;
        }
        Commands::Practice {
            scenario,
            relay_url,
            list,
        } => {
            if list {
                for id in ScenarioId::ALL {
                    println!("{id} — {}", id.definition().subtitle);
                }
                return Ok(());
            }
            // Keep the chat readable: console logging only, warnings and up.
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
                )
                .init();
            let scenario: ScenarioId = scenario.parse().map_err(anyhow::Error::new)?;
            practice::run(scenario, relay_url.unwrap_or(config.relay_url)).await?;
        }
        Commands::Health => {
            let client = reqwest::Client::new();
            match client
                .get(format!("{}/api/health", config.relay_url))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("relay is not reachable at {}", config.relay_url);
                }
            }
        }
    }

    Ok(())
}
