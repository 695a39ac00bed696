//! imgvault CLI - command line front-end for the upload store
//!
//! Drives the same store/remove operations the chat backend calls, for local
//! inspection and scripting.

use clap::{Parser, Subcommand};
use imgvault::{BlobStore, MatchMode, StoreOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgvault")]
#[command(about = "Local image blob storage emulating a hosted media-upload service")]
#[command(version)]
struct Cli {
    /// Managed uploads directory
    #[arg(short, long, default_value_os_t = BlobStore::default_root())]
    root: PathBuf,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Store an image from a file path or an inline data: payload
    Store {
        /// File path or data:<media-type>;base64,<payload> string
        input: String,
        /// Logical id to store under (derived from the clock when omitted)
        #[arg(short, long)]
        id: Option<String>,
    },

    /// Remove a stored image by logical id
    Rm {
        /// The logical id
        id: String,
        /// Require an exact stem match instead of the legacy prefix match
        #[arg(long)]
        exact: bool,
    },

    /// List stored blob file names
    Ls,

    /// Show store status
    Status,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Store { input, id } => {
            let store = BlobStore::new(cli.root)?;
            let options = match id {
                Some(id) => StoreOptions::with_id(id),
                None => StoreOptions::default(),
            };
            let blob = store.store(&input, &options)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "url": blob.url,
                    "id": blob.id.as_str()
                }),
            );
        }

        Commands::Rm { id, exact } => {
            let mode = if exact {
                MatchMode::Exact
            } else {
                MatchMode::Prefix
            };
            let store = BlobStore::new(cli.root)?.with_match_mode(mode);
            let receipt = store.remove(&id)?;
            output(&cli.format, &serde_json::to_value(receipt)?);
        }

        Commands::Ls => {
            let store = BlobStore::new(cli.root)?;
            let files = store.list()?;
            output(
                &cli.format,
                &serde_json::json!({
                    "count": files.len(),
                    "files": files
                }),
            );
        }

        Commands::Status => {
            let store = BlobStore::new(cli.root)?;
            let files = store.list()?;
            output(
                &cli.format,
                &serde_json::json!({
                    "root": store.root().display().to_string(),
                    "blobs": files.len()
                }),
            );
        }
    }

    Ok(())
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
