use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use hashtag_api::ServerConfig;
use hashtag_api::config::DEFAULT_ADDR;
use hashtag_api::models::DEFAULT_MODEL;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// hashtag-api - generate hashtags for free text with a local Ollama model
#[derive(Parser)]
#[command(name = "hashtag-api")]
#[command(about = "HTTP service that generates hashtags using a local Ollama model")]
#[command(version)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "HASHTAG_API_ADDR", default_value = DEFAULT_ADDR)]
    addr: SocketAddr,

    /// Ollama base URL or host:port (defaults to http://localhost:11434)
    #[arg(long, env = "OLLAMA_HOST", value_name = "URL")]
    ollama_url: Option<String>,

    /// Model used when a request does not name one
    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Timeout for each call to Ollama, in seconds
    #[arg(long, default_value_t = 60, value_name = "SECONDS")]
    timeout_secs: u64,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr,
            ollama_url: self.ollama_url,
            default_model: self.model,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    hashtag_api::server::serve(cli.into_config()).await
}
