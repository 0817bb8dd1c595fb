use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use eo_tracker::adapters::clock::SystemClock;
use eo_tracker::adapters::courtlistener::{CourtListenerClient, CourtListenerConfig};
use eo_tracker::adapters::federal_register::{FederalRegisterClient, FederalRegisterConfig};
use eo_tracker::adapters::storage::JsonFileStore;
use eo_tracker::application::{
    AssignDocketIdsHandler, DocumentList, ImportDocumentsError, ImportDocumentsHandler,
    ListDocumentsHandler, ListDocumentsQuery, RefreshDocketsError, RefreshDocketsHandler,
    Throttle,
};
use eo_tracker::config::{self, AppConfig, LoggingConfig};
use eo_tracker::domain::foundation::DocumentType;
use eo_tracker::domain::query::{
    challenge_recently_updated, document_recently_updated, DocumentFilter, SortDirection, SortKey,
    SortState, StatusFilter, TypeSelection, ViewState,
};
use eo_tracker::ports::{Clock, DocketError, FeedError, StorageError};
use eo_tracker::telemetry::init_tracing;

#[derive(Parser)]
#[command(name = "eo-tracker")]
#[command(about = "Track executive orders, proclamations and their court challenges")]
#[command(
    after_help = "Environment:\n  CL_API_KEY        CourtListener API token (required by `update`)\n  EO_TRACKER__*     Configuration overrides, e.g. EO_TRACKER__STORAGE__DATA_FILE\n  RUST_LOG          Log filter override"
)]
struct Cli {
    /// Path of the JSON document collection
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh each tracked challenge's lastUpdated from its CourtListener docket
    Update {
        /// Pause between docket requests in milliseconds (0 disables)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Fill in missing docket ids from CourtListener challenge URLs
    AssignDockets,
    /// Merge newly published documents from the Federal Register
    Import,
    /// Print the filtered, sorted document table
    List {
        /// Case-insensitive text matched against titles and ids
        #[arg(long, default_value = "")]
        query: String,
        /// `all` or a status
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// Document types to include (repeatable; default all)
        #[arg(long = "type")]
        types: Vec<DocumentType>,
        /// Sort column: id, title, date or recently_updated
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort descending
        #[arg(long, default_value_t = false)]
        desc: bool,
        /// Most recently updated challenges first
        #[arg(long, default_value_t = false, conflicts_with_all = ["sort", "desc"])]
        recent: bool,
        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] config::ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Refresh(#[from] RefreshDocketsError),

    #[error(transparent)]
    Import(#[from] ImportDocumentsError),

    #[error("failed to create CourtListener client: {0}")]
    Docket(#[from] DocketError),

    #[error("failed to create Federal Register client: {0}")]
    Feed(#[from] FeedError),

    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let _ = init_tracing(&LoggingConfig::default());
            error!(error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let _ = init_tracing(&config.logging);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "eo-tracker failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, mut config: AppConfig) -> Result<(), CliError> {
    if let Some(path) = cli.data_file {
        config.storage.data_file = path;
    }
    config.validate()?;

    let store = Arc::new(JsonFileStore::new(&config.storage.data_file));
    info!(data_file = %config.storage.data_file.display(), "Using data file");

    match cli.command {
        Commands::Update { delay_ms } => {
            let api_key = config.courtlistener.require_api_key()?;
            let client = CourtListenerClient::new(
                CourtListenerConfig::new(api_key)
                    .with_base_url(&config.courtlistener.base_url)
                    .with_timeout(config.courtlistener.timeout())
                    .with_user_agent(&config.courtlistener.user_agent),
            )?;
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.courtlistener.request_delay());

            let handler = RefreshDocketsHandler::new(store, Arc::new(client), Throttle::fixed(delay));
            let report = handler.handle().await?;
            info!(
                checked = report.checked,
                updated = report.updated,
                unchanged = report.unchanged,
                failed = report.failed,
                "Docket refresh finished"
            );
        }
        Commands::AssignDockets => {
            AssignDocketIdsHandler::new(store).handle().await?;
        }
        Commands::Import => {
            let settings = &config.federal_register;
            let client = FederalRegisterClient::new(
                FederalRegisterConfig::new(&settings.president, settings.published_since()?)
                    .with_base_url(&settings.base_url)
                    .with_per_page(settings.per_page)
                    .with_timeout(settings.timeout()),
            )?;
            ImportDocumentsHandler::new(store, Arc::new(client))
                .handle()
                .await?;
        }
        Commands::List {
            query,
            status,
            types,
            sort,
            desc,
            recent,
            json,
        } => {
            let filter = DocumentFilter::new()
                .with_query(query)
                .with_status(status)
                .with_types(TypeSelection::only(types));
            let mut sort_state = match sort {
                Some(key) if desc => SortState::new(key, SortDirection::Descending),
                Some(key) => SortState::new(key, SortDirection::Ascending),
                None => SortState::default(),
            };
            if recent {
                sort_state.show_recently_updated();
            }
            let view = ViewState::new(filter, sort_state);

            let list = ListDocumentsHandler::new(store)
                .handle(ListDocumentsQuery { view })
                .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&list.items)?);
            } else {
                print_table(&list, &SystemClock);
            }
        }
    }

    Ok(())
}

fn print_table(list: &DocumentList, clock: &dyn Clock) {
    let now = clock.now();
    for document in &list.items {
        let marker = if document_recently_updated(document, now) {
            "*"
        } else {
            " "
        };
        println!(
            "{}{:<8} {} {:<11} {:<16} {}",
            marker,
            document.id.as_str(),
            document.date.to_string(),
            document.status.as_str(),
            document.document_type().as_str(),
            document.title
        );
        for challenge in &document.challenges {
            let updated = challenge
                .last_updated
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string());
            let marker = if challenge_recently_updated(challenge, now) {
                "*"
            } else {
                " "
            };
            println!("   {} {} {}", marker, updated, challenge.title);
        }
    }
    println!("{} of {} documents", list.items.len(), list.total);
}
