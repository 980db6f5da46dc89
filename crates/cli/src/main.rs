//! `giphy-node` CLI entry-point — a stand-alone host for the Giphy node.
//!
//! Available sub-commands:
//! - `search`     — run one execution and print the written outputs as JSON.
//! - `manifest`   — print the node's settings/inputs/outputs description.
//! - `visibility` — print which record output a mode value shows.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nodes::fixtures::{BuiltinFixtures, DirFixtures};
use nodes::giphy::{GiphyNode, HttpSearchClient, Mode};
use nodes::secrets::EnvSecrets;
use nodes::{ExecutionContext, FixtureProvider};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "giphy-node", about = "Search Giphy the way a workflow step does", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "GIPHY_NODE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for gifs and print the outputs.
    Search {
        /// Search term. An empty term writes no outputs.
        term: String,
        /// `random_result` or `all_results`. Overrides the config file.
        #[arg(long)]
        mode: Option<Mode>,
        /// Use dummy data instead of calling the API.
        #[arg(long)]
        test_mode: bool,
        /// Directory holding `<name>.json` fixtures for test mode.
        #[arg(long, requires = "test_mode")]
        fixtures: Option<PathBuf>,
        /// Run as a non-interactive harness (suppresses user warnings).
        #[arg(long)]
        non_interactive: bool,
        /// Override the search endpoint.
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Print the node manifest.
    Manifest,
    /// Print output visibility for a `mode` value.
    Visibility {
        mode: String,
    },
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("giphy_node=info,nodes=info,notice=info"));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            term,
            mode,
            test_mode,
            fixtures,
            non_interactive,
            endpoint,
        } => {
            let mut config = Config::load(cli.config.as_deref())?;
            if let Some(endpoint) = endpoint {
                config.giphy.endpoint = endpoint;
            }
            if let Some(mode) = mode {
                config.settings.mode = mode;
            }

            let fixtures: Arc<dyn FixtureProvider> = match fixtures {
                Some(dir) => Arc::new(DirFixtures::new(dir)),
                None => Arc::new(BuiltinFixtures),
            };

            let client = HttpSearchClient::new(&config.giphy)?;
            let node = GiphyNode::new(Arc::new(client), Arc::new(EnvSecrets))
                .with_settings(config.settings.clone())
                .with_secret_name(config.giphy.secret_name.clone())
                .with_fixtures(fixtures);

            let mut ctx = if test_mode {
                ExecutionContext::test_mode()
            } else {
                ExecutionContext::live()
            };
            if non_interactive {
                ctx = ctx.non_interactive();
            }

            info!(execution_id = %ctx.execution_id, mode = %config.settings.mode, "Starting search");
            let outputs = node.run(&term, &ctx).await?;

            println!("{}", serde_json::to_string_pretty(&outputs)?);
        }
        Command::Manifest => {
            println!("{}", serde_json::to_string_pretty(&GiphyNode::manifest())?);
        }
        Command::Visibility { mode } => {
            let visibility = GiphyNode::setting_changed("mode", "", &mode);
            println!("{}", serde_json::to_string_pretty(&visibility)?);
        }
    }

    Ok(())
}
