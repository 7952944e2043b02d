//! Job listing command implementation.

use anyhow::{Context, Result};

use lookout_client::config::Config;
use lookout_client::service::{GetJobsService, JobsService};
use lookout_client::transport::{AbortController, HttpTransport};
use lookout_client::{Job, JobFilter, JobOrder};

/// Arguments for `lookout jobs`, after flag parsing
#[derive(Debug, Clone, Default)]
pub struct JobsArgs {
    pub filters: Vec<JobFilter>,
    pub annotations: Vec<JobFilter>,
    pub order: Option<JobOrder>,
    pub skip: u64,
    pub take: Option<u64>,
    pub active_job_sets: bool,
    pub backend: Option<String>,
    pub url: Option<String>,
    pub json: bool,
}

/// Fold command-line overrides into the loaded config
fn apply_overrides(mut config: Config, args: &JobsArgs) -> Config {
    if let Some(url) = &args.url {
        config.server.url = url.clone();
    }
    if let Some(backend) = &args.backend {
        config.server.backend = Some(backend.clone());
    }
    if let Some(take) = args.take {
        config.query.take = take;
    }
    if let Some(order) = &args.order {
        config.query.order = order.clone();
    }
    config.query.active_job_sets |= args.active_job_sets;
    config
}

fn collect_filters(args: &JobsArgs) -> Vec<JobFilter> {
    args.filters
        .iter()
        .cloned()
        .chain(args.annotations.iter().cloned().map(|mut f| {
            f.is_annotation = true;
            f
        }))
        .collect()
}

fn format_job_line(job: &Job) -> String {
    format!(
        "  {} [{}] {}/{}",
        job.job_id().unwrap_or("?"),
        job.state().unwrap_or("UNKNOWN"),
        job.queue().unwrap_or("-"),
        job.job_set().unwrap_or("-"),
    )
}

pub async fn jobs_command(config: Config, args: JobsArgs) -> Result<()> {
    let config = apply_overrides(config, &args);
    config.validate().context("Invalid configuration")?;

    let filters = collect_filters(&args);
    let transport = HttpTransport::from_settings(&config.server);
    let service = GetJobsService::new(config.backend().map(str::to_string));

    let controller = AbortController::new();
    let signal = controller.signal();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupted, aborting request");
            controller.abort();
        }
    });

    let result = service
        .get_jobs(
            &transport,
            &filters,
            config.query.active_job_sets,
            &config.query.order,
            args.skip,
            config.query.take,
            Some(&signal),
        )
        .await;
    interrupt.abort();

    let response = match result {
        Ok(response) => response,
        Err(e) if e.is_aborted() => {
            // The detached HTTP call would otherwise hold the runtime open until it times out
            eprintln!("Interrupted");
            std::process::exit(130);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to list jobs from {}", config.server.url))
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response.jobs)?);
        return Ok(());
    }

    if response.jobs.is_empty() {
        println!("No jobs found.");
        return Ok(());
    }

    println!(
        "Jobs ({}, skip={}, take={}):\n",
        response.jobs.len(),
        args.skip,
        config.query.take
    );
    for job in &response.jobs {
        println!("{}", format_job_line(job));
    }

    Ok(())
}
