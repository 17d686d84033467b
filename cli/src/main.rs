//! CLI for reveal-scaffold.
//!
//! `init` bootstraps a reveal.js slide deck from the latest upstream release;
//! `serve` serves it with live reload.

use clap::{Parser, Subcommand};
use reveal_scaffold::scaffold::{DEFAULT_SLIDE, DEFAULT_THEME, DEFAULT_TITLE};
use reveal_scaffold::serve::DEFAULT_ADDRESS;
use reveal_scaffold::{
    InitConfig, InitError, InitSummary, Initializer, ScaffoldParams, ServeConfig, Server,
    ServerStartError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// reveal-scaffold - Bootstrap and serve reveal.js slide decks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root directory.
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download reveal.js and scaffold a slide deck.
    #[command(alias = "i")]
    Init {
        /// Deck title; also the initial slide content.
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        /// reveal.js theme name.
        #[arg(long, default_value = DEFAULT_THEME)]
        theme: String,

        /// Slide file name, relative to the root.
        #[arg(long, default_value = DEFAULT_SLIDE)]
        slide: String,

        /// GitHub Personal Access Token for the release lookup.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// GitHub API base URL, for GitHub Enterprise or a mirror.
        #[arg(long, env = "GITHUB_API_URL")]
        api_url: Option<String>,
    },

    /// Serve the deck with live reload.
    #[command(alias = "s")]
    Serve {
        /// Listen address, `[host]:port`.
        #[arg(short, long, default_value = DEFAULT_ADDRESS)]
        address: String,

        /// Watch subdirectories as well as the root.
        #[arg(short, long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Several TLS backends are linked in; pick one process-wide.
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        error!("Failed to install the TLS crypto provider");
        return ExitCode::FAILURE;
    }

    // Parse arguments
    let args = Args::parse();

    match args.command {
        Command::Init {
            title,
            theme,
            slide,
            token,
            api_url,
        } => {
            let params = ScaffoldParams::new(title, theme, slide);
            match run_init(args.root, params, token, api_url).await {
                Ok(summary) => {
                    print_summary(&summary);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(error = %e, "Init failed");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Serve { address, watch } => match run_serve(args.root, &address, watch).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Serve failed");
                ExitCode::FAILURE
            }
        },
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run_init(
    root: PathBuf,
    params: ScaffoldParams,
    token: Option<String>,
    api_url: Option<String>,
) -> Result<InitSummary, InitError> {
    let mut config = InitConfig::new(root, params);
    if let Some(token) = token {
        config = config.with_token(token);
    }
    if let Some(api_url) = api_url {
        config = config.with_api_base(api_url);
    }
    let initializer = Initializer::new(config)?;
    initializer.run().await
}

async fn run_serve(root: PathBuf, address: &str, watch: bool) -> Result<(), ServerStartError> {
    let config = ServeConfig::new(root, address)?.with_recursive_watch(watch);
    let server = Server::bind(config).await?;
    server.run().await
}

/// Prints the result of a successful init.
fn print_summary(summary: &InitSummary) {
    println!("\nSummary:");
    println!("  Release: {}", summary.release_tag);
    println!("  Archive: {}", summary.archive_url);
    println!(
        "  Directories created: {}",
        summary.extraction.directories_created
    );
    println!("  Files extracted: {}", summary.extraction.files_written);
    println!("  Entries skipped: {}", summary.extraction.entries_skipped);
    println!("  Index: {}", summary.output.index_path.display());
    println!("  Slide: {}", summary.output.slide_path.display());
}
