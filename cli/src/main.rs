//! CLI for the Jira bulk creator.
//!
//! Reads a tracker configuration and a task list, then creates one issue per
//! task, linking children to parents created earlier in the same run.

use clap::Parser;
use jira_bulk_creator::{
    ConfigOverrides, IssueStatus, ParentLink, RunReport, Runner, RunnerConfig, RunnerError,
    TaskOutcome,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Jira Bulk Creator - Create Jira issues from a task list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the tracker configuration file (JSON, or TOML with a .toml extension).
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Path to the task list (JSON array).
    #[arg(long, default_value = "tasks.json")]
    tasks: PathBuf,

    /// Tracker base URL, e.g. https://acme.atlassian.net.
    #[arg(long, env = "JIRA_URL")]
    jira_url: Option<String>,

    /// API token.
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Account email used for authentication.
    #[arg(long, env = "JIRA_USER_EMAIL")]
    user_email: Option<String>,

    /// Key of the project to create issues in.
    #[arg(long, env = "JIRA_PROJECT_KEY")]
    project_key: Option<String>,

    /// Preview requests without creating issues.
    #[arg(long)]
    dry_run: bool,

    /// Timeout in seconds for each create request.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(report) => {
            print_report(&report);

            if report.summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
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

/// Main execution logic.
async fn run(args: Args) -> Result<RunReport, RunnerError> {
    let overrides = ConfigOverrides {
        jira_url: args.jira_url,
        api_token: args.api_token,
        user_email: args.user_email,
        project_key: args.project_key,
    };
    let config = RunnerConfig::new(args.config, args.tasks)
        .with_overrides(overrides)
        .with_dry_run(args.dry_run)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    Runner::new(config).run().await
}

/// Prints the final run summary followed by items needing attention.
fn print_report(report: &RunReport) {
    let summary = &report.summary;
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Tasks loaded: {}", summary.tasks_loaded);
    if summary.dry_run {
        println!("  Issues previewed: {}", summary.issues_created);
    } else {
        println!("  Issues created: {}", summary.issues_created);
    }
    println!("  Issues skipped: {}", summary.issues_skipped);
    println!("  Issues failed: {}", summary.issues_failed);
    println!("  Unresolved parents: {}", summary.unresolved_parents);

    let attention: Vec<&TaskOutcome> = report
        .outcomes
        .iter()
        .filter(|o| !o.is_created() || o.has_unresolved_parent())
        .collect();
    if attention.is_empty() {
        return;
    }

    println!("\nNeeds attention:");
    for outcome in attention {
        let label = if outcome.summary.is_empty() {
            format!("#{}", outcome.position + 1)
        } else {
            format!("#{} '{}'", outcome.position + 1, outcome.summary)
        };
        match &outcome.status {
            IssueStatus::Created { key, .. } => println!("  {label}: created as {key}"),
            IssueStatus::Skipped { reason } => println!("  {label}: skipped ({reason})"),
            IssueStatus::Failed { error, .. } => println!("  {label}: failed ({error})"),
        }
        if let ParentLink::Unresolved { summary: parent } = &outcome.parent {
            println!("    parent '{parent}' was not created earlier in this run; no link set");
        }
    }
}
