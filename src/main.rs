//! Circle Contacts CLI - Main entry point
//!
//! ```bash
//! circle-contacts add-user --id 1 --username ada
//! circle-contacts import --user 1 --format csv contacts.csv
//! circle-contacts export --user 1 --format json --output contacts.json
//! ```
//!
//! Logs go to stderr so that exports written to stdout stay clean.

use anyhow::{Context, Result};
use circle_contacts::repositories::{ContactRepository, UserRepository};
use circle_contacts::{
    Config, ContactExportService, ContactExportServiceImpl, ContactImportService,
    ContactImportServiceImpl, ContactStore, StoreContactRepository, StoreUserRepository,
    TransferFormat, TransferMetrics, User, UserId,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circle-contacts")]
#[command(about = "Import and export a user's contacts as JSON or CSV", long_about = None)]
struct Cli {
    /// Store snapshot path (overrides CIRCLE_STORE_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Print transfer metrics to stderr when done
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export every contact owned by a user
    Export {
        /// Owning user ID
        #[arg(short, long)]
        user: UserId,

        /// Output format
        #[arg(short, long, value_enum)]
        format: TransferFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import contacts from a file into a user's address book
    Import {
        /// Owning user ID
        #[arg(short, long)]
        user: UserId,

        /// Input format
        #[arg(short, long, value_enum)]
        format: TransferFormat,

        /// File to import
        input: PathBuf,
    },

    /// Register a user so contacts can be imported for them
    AddUser {
        /// User ID
        #[arg(long)]
        id: UserId,

        /// Login name
        #[arg(long)]
        username: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path.clone());
    let store = match ContactStore::open(&store_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to open contact store {}: {}", store_path.display(), e);
            return Err(e.into());
        }
    };
    info!("Using contact store at {}", store_path.display());

    let contact_repo =
        Arc::new(StoreContactRepository::new(store.clone())) as Arc<dyn ContactRepository>;
    let user_repo = Arc::new(StoreUserRepository::new(store)) as Arc<dyn UserRepository>;
    let metrics = TransferMetrics::new();

    match cli.command {
        Commands::Export {
            user,
            format,
            output,
        } => {
            let service = ContactExportServiceImpl::new(contact_repo, metrics.clone());
            let file = service.export(user, format).await?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, &file.bytes)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {} ({})", path.display(), file.content_type());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&file.bytes)?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Import {
            user,
            format,
            input,
        } => {
            let bytes = tokio::fs::read(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let service = ContactImportServiceImpl::new(contact_repo, user_repo, metrics.clone())
                .with_max_upload_bytes(config.max_upload_bytes);
            let imported = service.import(user, format, &bytes).await?;

            println!("Imported {} contacts for user {}", imported.len(), user);
        }
        Commands::AddUser { id, username } => {
            let user = user_repo.save(User::new(id, username)).await?;
            println!("Saved user {} ({})", user.id, user.username);
        }
    }

    if cli.metrics {
        eprintln!("{}", metrics.summary());
    }

    Ok(())
}
