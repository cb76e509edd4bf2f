//! Terminal rendition of the live voting statistics dashboard.
//!
//! Logs go to stderr (filtered by `RUST_LOG`) so stdout carries only the
//! rendered screen or, with `--json`, the raw payload.

mod render;
mod source;
mod watch;

use std::io::Write as _;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use votestats::endpoint::DEFAULT_API_BASE;
use votestats::loader::{gate, load_all, load_overview};
use votestats::{FetchError, GateError, ResultsData, RoleFilter};

use source::HttpSource;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing credential; pass --token or set VOTE_TOKEN")]
    MissingToken(#[from] GateError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", .0.user_message())]
    Fetch(#[from] FetchError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "votestats", about = "Live voting statistics in the terminal")]
struct Cli {
    #[arg(long, env = "VOTE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "VOTE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "VOTE_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    /// Print the raw payload as JSON instead of the rendered screen.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Public participation overview for every role.
    Overview(RoleArgs),
    /// Candidate results; requires a credential.
    Results,
    /// Re-render the overview on an interval until interrupted.
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
struct RoleArgs {
    /// Only show one role (`all` shows every role).
    #[arg(long, default_value = "all")]
    role: String,
}

#[derive(Args, Debug)]
struct WatchArgs {
    #[arg(long, default_value_t = 10)]
    interval_secs: u64,

    #[command(flatten)]
    role: RoleArgs,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = HttpSource::new(cli.api_base.clone(), Duration::from_secs(cli.timeout_secs.max(1)))?;

    match cli.command {
        Command::Overview(args) => run_overview(&source, &RoleFilter::parse(&args.role), cli.json).await,
        Command::Results => run_results(&source, cli.token.as_deref(), cli.json).await,
        Command::Watch(args) => {
            let period = Duration::from_secs(args.interval_secs.max(1));
            let filter = RoleFilter::parse(&args.role.role);
            watch::watch(&source, &filter, period, tokio::signal::ctrl_c(), print_text).await
        }
    }
}

async fn run_overview(source: &HttpSource, filter: &RoleFilter, as_json: bool) -> Result<(), CliError> {
    let overview = load_overview(source).await.inspect_err(log_fetch_error)?;
    if as_json {
        return print_json(&serde_json::to_value(&overview)?);
    }
    print_text(&render::overview(&overview, filter))
}

async fn run_results(source: &HttpSource, token: Option<&str>, as_json: bool) -> Result<(), CliError> {
    let token = match gate(token) {
        Ok(token) => token,
        Err(e) => {
            print_text(&render::login_required())?;
            return Err(e.into());
        }
    };
    let load = load_all(source, token).await;
    for err in load.errors() {
        log_fetch_error(err);
    }
    let data = load.into_result()?;
    if as_json {
        return print_json(&results_json(&data)?);
    }
    print_text(&render::results(&data))
}

fn results_json(data: &ResultsData) -> Result<Value, CliError> {
    let rows: Vec<Value> = data
        .rows
        .iter()
        .map(|row| {
            json!({
                "id": row.candidate.id,
                "name": row.candidate.name,
                "party": row.candidate.party,
                "count": row.count,
                "percentage": row.percentage,
            })
        })
        .collect();
    Ok(json!({ "stats": serde_json::to_value(&data.stats)?, "rows": rows }))
}

fn log_fetch_error(err: &FetchError) {
    if err.is_transport() {
        tracing::error!(endpoint = %err.endpoint(), error = %err, "request failed");
    } else {
        tracing::warn!(endpoint = %err.endpoint(), error = %err, "request rejected");
    }
}

fn print_text(text: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
