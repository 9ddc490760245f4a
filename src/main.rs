use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paper_finder::config::{find_config_file, load_config, Config, LoggingConfig};
use paper_finder::loader::{csv_export_url, DataSource, TableLoader};
use paper_finder::models::{SearchField, SearchQuery, SearchStrategy, Table};
use paper_finder::present::{self, OutputFormat};
use paper_finder::shell::Shell;
use paper_finder::ui::{self, Spinner, Status};
use paper_finder::utils::{HttpClient, RetryConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Paper Finder - search a spreadsheet of academic papers by title, author or year
#[derive(Parser, Debug)]
#[command(name = "paper-finder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search a spreadsheet of academic papers by title, author or year", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error logging
    #[arg(long, short)]
    quiet: bool,

    /// Output format for results: plain, table or json
    #[arg(long, short, global = true, default_value = "plain")]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds for online sheets
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Choose a data source and search from a menu (default)
    #[command(alias = "i")]
    Interactive,

    /// Run a single search and print the results
    #[command(alias = "s")]
    Search {
        /// Keyword matched as a case-insensitive substring
        keyword: String,

        /// Field to search: title, author or year (default from config, else title)
        #[arg(long, short)]
        field: Option<SearchField>,

        /// Search strategy: linear finds every match, binary finds the run of
        /// matches around the first hit (default from config, else linear)
        #[arg(long, short)]
        strategy: Option<SearchStrategy>,

        /// Local spreadsheet or CSV file
        #[arg(long, conflicts_with = "sheet_url")]
        file: Option<PathBuf>,

        /// Google Sheets sharing URL
        #[arg(long)]
        sheet_url: Option<String>,
    },

    /// Print the CSV export URL for a Google Sheets sharing link
    #[command(alias = "url")]
    ExportUrl {
        /// Sharing URL containing /d/<id>/ and gid=<sheet>
        url: String,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn init_tracing(verbose: u8, quiet: bool, logging: &LoggingConfig) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => logging.level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("paper_finder={}", level)),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(find_config_file);
    let mut config =
        load_config(config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }

    init_tracing(cli.verbose, cli.quiet, &config.logging);

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    let format = cli.output;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive(&config, format).await,

        Commands::Search {
            keyword,
            field,
            strategy,
            file,
            sheet_url,
        } => {
            let source = match (file, sheet_url) {
                (Some(path), _) => DataSource::Local(path),
                (None, Some(url)) => DataSource::Online(url),
                (None, None) => DataSource::Local(config.source.local_path.clone()),
            };

            let Some(table) = load_table(&source, &config).await? else {
                return Ok(ExitCode::FAILURE);
            };

            let query = SearchQuery::new(&keyword)
                .field(field.unwrap_or(config.search.default_field))
                .strategy(strategy.unwrap_or(config.search.default_strategy));

            ui::print_status(
                Status::Search,
                &format!(
                    "Searching {} for '{}' ({} search)",
                    query.field, keyword, query.strategy
                ),
            );
            let result = paper_finder::search::execute(&table, &query);
            print!("{}", present::render(&result, &keyword, format));
            Ok(ExitCode::SUCCESS)
        }

        Commands::ExportUrl { url } => match csv_export_url(&url) {
            Ok(export_url) => {
                println!("{}", export_url);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                ui::print_status(Status::Error, &e.to_string());
                Ok(ExitCode::FAILURE)
            }
        },

        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load a table, reporting progress and failures on stderr.
///
/// Returns `None` when loading failed; the caller must skip the search phase.
async fn load_table(source: &DataSource, config: &Config) -> Result<Option<Table>> {
    let client = HttpClient::with_timeout(config.http.timeout())?;
    let loader = TableLoader::new(client)
        .with_retry(RetryConfig::default().max_attempts(config.http.max_attempts));

    let spinner = Spinner::new(&format!("Loading {}...", source));
    match loader.load(source).await {
        Ok(table) => {
            spinner.finish_with_success(&format!("Loaded {} papers", table.len()));
            Ok(Some(table))
        }
        Err(e) => {
            spinner.finish_with_error(&format!("Failed to load data: {}", e));
            Ok(None)
        }
    }
}

async fn run_interactive(config: &Config, format: OutputFormat) -> Result<ExitCode> {
    ui::print_banner();

    let stdin = std::io::stdin();
    let source = Shell::new(stdin.lock(), std::io::stdout()).choose_source(&config.source)?;

    let Some(source) = source else {
        ui::print_status(Status::Warning, "No data source selected");
        return Ok(ExitCode::SUCCESS);
    };

    ui::print_status(Status::Info, &format!("Data source: {}", source));

    let Some(table) = load_table(&source, config).await? else {
        return Ok(ExitCode::FAILURE);
    };

    Shell::new(stdin.lock(), std::io::stdout())
        .with_format(format)
        .run(&table)?;

    Ok(ExitCode::SUCCESS)
}
