use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lookout_client::config::Config;
use lookout_client::{JobFilter, JobOrder};

mod cli;

#[derive(Parser)]
#[command(name = "lookout")]
#[command(about = "List jobs from a Lookout job browser API")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.lookout/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List jobs matching filters
    Jobs {
        /// Filter as field:match:value (e.g. queue:exact:queue-1, state:anyOf:RUNNING,PENDING)
        #[arg(short, long = "filter")]
        filters: Vec<JobFilter>,

        /// Annotation filter as key:match:value
        #[arg(short, long = "annotation")]
        annotations: Vec<JobFilter>,

        /// Sort as field[:asc|desc]
        #[arg(short, long)]
        order: Option<JobOrder>,

        /// Number of jobs to skip
        #[arg(long, default_value_t = 0)]
        skip: u64,

        /// Maximum number of jobs to return
        #[arg(short, long)]
        take: Option<u64>,

        /// Only jobs from job sets that still have active jobs
        #[arg(long)]
        active_job_sets: bool,

        /// Backend identifier (e.g. jsonb)
        #[arg(short, long)]
        backend: Option<String>,

        /// Lookout API base URL
        #[arg(long)]
        url: Option<String>,

        /// Print jobs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Jobs {
            filters,
            annotations,
            order,
            skip,
            take,
            active_job_sets,
            backend,
            url,
            json,
        } => {
            let config = Config::load_from(cli.config.as_deref())?;
            let args = cli::jobs::JobsArgs {
                filters,
                annotations,
                order,
                skip,
                take,
                active_job_sets,
                backend,
                url,
                json,
            };
            cli::jobs::jobs_command(config, args).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(cli.config, force)?;
        }
    }

    Ok(())
}
