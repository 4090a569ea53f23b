use std::{net::IpAddr, path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use extra::Redacted;
use reqwest::Url;
use server::{NotionOpts, ServerOpts, serve};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the server with the specified configuration.
    Server {
        /// The address the server binds to.
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        /// The port number on which the server will listen for incoming connections.
        /// Example: `8080`
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,

        /// Integration token used as the bearer credential for the Notion API.
        /// Never logged. When absent the server starts but every lookup fails.
        #[arg(long, env = "NOTION_API_KEY", hide_env_values = true)]
        notion_api_key: Option<String>,

        /// Id of the database holding one record per creator.
        /// Dashes and whitespace are ignored.
        /// Example: `1a2b3c4d-5e6f-7081-92a3-b4c5d6e7f809`
        #[arg(long, env = "NOTION_DATABASE_ID")]
        notion_database_id: Option<String>,

        /// Root of the Notion API.
        #[arg(long, env = "NOTION_BASE_URL", default_value = notion::DEFAULT_BASE_URL)]
        notion_base_url: Url,

        /// Seconds before an outbound query is abandoned.
        #[arg(long, env = "NOTION_TIMEOUT", default_value_t = 30)]
        notion_timeout: u64,

        /// The directory where the UI files are located.
        /// Example: `./ui` or `/var/www/html`
        #[arg(long, env = "UI_DIR")]
        ui_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Args::parse().cmd {
        Command::Server {
            host,
            port,
            notion_api_key,
            notion_database_id,
            notion_base_url,
            notion_timeout,
            ui_dir,
        } => Ok(serve(ServerOpts {
            host,
            port,
            notion: NotionOpts {
                api_key: notion_api_key.map(Redacted::from),
                database_id: notion_database_id,
                base_url: notion_base_url,
                timeout: Duration::from_secs(notion_timeout),
            },
            ui_dir,
        })
        .await?),
    }
}
