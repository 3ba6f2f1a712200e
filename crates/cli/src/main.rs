use clap::Parser;
use rdpurge_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rdpurge")]
#[command(version)]
#[command(about = "Prune old Rundeck execution history, keeping the most recent runs")]
struct Cli {
    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Only purge executions of jobs matching this filter
    #[arg(short = 'j', long, alias = "job_filter")]
    job_filter: Option<String>,

    /// Rundeck API token
    #[arg(short = 't', long, alias = "access_token")]
    access_token: Option<String>,

    /// Rundeck host, including the scheme
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Rundeck port
    #[arg(short = 'P', long)]
    port: Option<u16>,

    /// Number of most recent executions to keep
    #[arg(short = 'k', long, alias = "keep_history_size")]
    keep: Option<u64>,

    /// Maximum number of executions to delete per project (unbounded by default)
    #[arg(short = 'm', long, alias = "max_delete_size")]
    max_delete: Option<u64>,

    /// Executions deleted per request
    #[arg(short = 'c', long, alias = "chunk_size", value_parser = clap::value_parser!(u64).range(1..))]
    chunk_size: Option<u64>,

    /// Show what would be deleted without deleting anything
    #[arg(short = 'n', long, alias = "dry_run")]
    dry_run: bool,

    /// Only purge this project
    #[arg(short = 'p', long)]
    project: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            host: self.host.clone(),
            port: self.port,
            access_token: self.access_token.clone(),
            project: self.project.clone(),
            job_filter: self.job_filter.clone(),
            keep: self.keep,
            max_delete: self.max_delete,
            chunk_size: self.chunk_size,
            dry_run: self.dry_run,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config.logging);

    info!("Starting rdpurge v{}", env!("CARGO_PKG_VERSION"));
    info!(server = ?config.server, purge = ?config.purge, "Effective settings");

    let clients = di::Clients::new(&config.server)?;
    let use_cases = di::UseCases::new(&clients);

    let reports = use_cases
        .purge_projects
        .execute(&config.purge)
        .await
        .map_err(|e| {
            if e.is_transport() {
                error!(error = %e, "Lost contact with the Rundeck server, purge aborted");
            } else {
                error!(error = %e, "Purge aborted");
            }
            anyhow::anyhow!(e)
        })?;

    let deleted: u64 = reports.iter().map(|r| r.deleted).sum();
    let planned: u64 = reports.iter().map(|r| r.planned).sum();
    info!(
        projects = reports.len(),
        planned,
        deleted,
        dry_run = config.purge.dry_run,
        "Purge complete"
    );

    Ok(())
}
